#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Served from the public image directory. Cards without one show a
    /// gradient placeholder.
    pub image: Option<ProjectImage>,
    pub tags: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub code_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Calubcub 1st High School IMS",
        description: "Built attendance, grading, and records features with automated PDF reports and OTP email auth to streamline \
            administration and security.",
        image: Some(ProjectImage { src: "/images/calubcub.png", alt: "Calubcub 1st High School" }),
        tags: &["Next.js", "Tailwind CSS", "Supabase", "pdf-lib", "Nodemailer"],
        demo_url: Some("https://calubcub.vercel.app/"),
        code_url: "https://github.com/glytch21/info-management-system",
    },
    Project {
        title: "Alangilan SHS Portal",
        description: "Full\u{2011}stack portal managing student, parent, and teacher profiles with secure auth and real\u{2011}time updates for \
            efficient information access and administration.",
        image: None,
        tags: &["TypeScript", "Next.js", "Tailwind CSS", "Supabase"],
        demo_url: None,
        code_url: "https://github.com/glytch21/student-portal",
    },
    Project {
        title: "CodeCrawlers: JS Learning Tool",
        description: "Gamified JavaScript learning experience with interactive levels, progress saving, and code editing via CodeMirror \
            and HTML Canvas.",
        image: Some(ProjectImage { src: "/images/codecrawlers.png", alt: "CodeCrawlers: JS Learning Tool" }),
        tags: &["JavaScript", "Next.js", "Tailwind CSS", "CodeMirror", "Supabase"],
        demo_url: None,
        code_url: "https://github.com/glytch21/codecrawlers.github.io",
    },
];
