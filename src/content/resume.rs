#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "AI Trainer \u{2013} Coding \u{2014} Outlier AI",
        period: "December 2024 \u{2014} May 2025",
        description: "Developed and reviewed programming solutions, debugged code, and created example projects in JavaScript and Python to improve LLM coding capabilities.",
    },
    TimelineEntry {
        title: "Web Developer \u{2014} Intern \u{2014} Innovatto IT Consultancy",
        period: "July 2023 \u{2014} November 2023",
        description: "Built a chat support ticketing system using TypeScript, Next.js, Tailwind CSS, and Supabase; optimized responsive performance and integrated secure authentication.",
    },
    TimelineEntry {
        title: "B.S. in Information Technology \u{2014} Westmead International School",
        period: "September 2020 \u{2014} July 2024",
        description: "Coursework and projects focused on full\u{2011}stack web development and modern JavaScript ecosystems.",
    },
];
