#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub skills: &'static [&'static str],
    pub values: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Gio Aaron Hernandez",
    short_name: "Gio Hernandez",
    role: "AI Trainer and Backend Web Developer",
    summary: "Backend web developer and AI trainer focused on JavaScript and TypeScript. I build responsive, accessible apps \
        with Next.js and React, ship to Vercel, and work with Supabase and MySQL for real\u{2011}time, secure data.",
    skills: &[
        "JavaScript",
        "TypeScript",
        "Next.js",
        "React",
        "HTML & CSS",
        "Tailwind CSS",
        "Supabase",
        "MySQL",
        "Vercel",
        "Git & GitHub",
        "VS Code",
    ],
    values: "Pragmatic solutions, thoughtful UX, clean abstractions, and continuous learning. Strong focus on performance and \
        accessibility. Bachelor of Science in Information Technology (Westmead International School, 2020\u{2013}2024).",
};
