use crate::components::icons::IconKind;
use crate::config;
use crate::contact::Handoff;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Mobile,
    Web,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Mobile => "Mobile Application",
            Category::Web => "Web Application",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            Category::Mobile => IconKind::Smartphone,
            Category::Web => IconKind::Monitor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tech: &'static [&'static str],
    pub glyph: &'static str,
    pub highlights: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Limra Convent School App",
        description: "Complete school management mobile application for Limra Convent featuring student test results, notices, upcoming tests, recent results, and school activities. Streamlines communication between teachers, students, and parents.",
        category: Category::Mobile,
        tech: &["React Native", "Firebase", "Node.js", "MongoDB"],
        glyph: "🏛️",
        highlights: &["Live in Production", "500+ Students", "Real-time Updates"],
    },
    Project {
        title: "EduPortal Web Platform",
        description: "Modern web platform for educational institutions featuring course management, online assessments, and student analytics dashboard with beautiful UI/UX design.",
        category: Category::Web,
        tech: &["React.js", "TypeScript", "Tailwind CSS", "AWS"],
        glyph: "📚",
        highlights: &["Multi-tenant Architecture", "Real-time Analytics", "Mobile Responsive"],
    },
    Project {
        title: "Student Assessment System",
        description: "Digital assessment platform that enables teachers to create, distribute, and grade tests online. Includes automated grading, detailed analytics, and performance tracking.",
        category: Category::Web,
        tech: &["Next.js", "PostgreSQL", "Stripe", "Docker"],
        glyph: "✏️",
        highlights: &["10,000+ Tests Taken", "Automated Grading", "Performance Analytics"],
    },
    Project {
        title: "Campus Connect App",
        description: "Social networking app designed specifically for educational campuses, enabling students and faculty to connect, share resources, and collaborate on projects.",
        category: Category::Mobile,
        tech: &["React Native", "GraphQL", "Redis", "Socket.io"],
        glyph: "🤝",
        highlights: &["Real-time Messaging", "File Sharing", "Event Management"],
    },
];

pub const SKILLS: &[&str] = &[
    "React Native",
    "React.js",
    "Node.js",
    "MongoDB",
    "TypeScript",
    "Tailwind CSS",
    "Firebase",
    "AWS",
    "UI/UX Design",
    "Mobile Development",
    "Web Development",
];

pub struct Expertise {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const EXPERTISE: &[Expertise] = &[
    Expertise {
        icon: IconKind::GraduationCap,
        title: "Education Focus",
        description: "Specialized in creating impactful educational technology solutions for schools and institutions.",
    },
    Expertise {
        icon: IconKind::Code,
        title: "Full-Stack Development",
        description: "Proficient in both mobile app and web development using modern technologies.",
    },
    Expertise {
        icon: IconKind::Lightbulb,
        title: "Innovation",
        description: "Passionate about creating user-centric solutions that solve real-world problems.",
    },
    Expertise {
        icon: IconKind::Users,
        title: "Client Success",
        description: "Committed to delivering projects that exceed expectations and drive results.",
    },
];

/// (value, label, accent class)
pub const STATS: &[(&str, &str, &str)] = &[
    ("5+", "Projects", "text-accent"),
    ("3+", "Years", "text-glow"),
    ("10+", "Schools", "text-secondary"),
    ("100%", "Passion", "text-accent"),
];

pub struct ContactInfo {
    pub icon: IconKind,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<Handoff>,
    pub accent: &'static str,
}

pub fn contact_info() -> Vec<ContactInfo> {
    vec![
        ContactInfo {
            icon: IconKind::Mail,
            label: "Email",
            value: config::CONTACT_EMAIL,
            link: Some(Handoff::mail_direct()),
            accent: "text-primary",
        },
        ContactInfo {
            icon: IconKind::Phone,
            label: "Phone",
            value: config::CONTACT_PHONE_DISPLAY,
            link: Some(Handoff::call()),
            accent: "text-accent",
        },
        ContactInfo {
            icon: IconKind::MapPin,
            label: "Location",
            value: config::LOCATION,
            link: None,
            accent: "text-secondary",
        },
        ContactInfo {
            icon: IconKind::Calendar,
            label: "Response Time",
            value: config::RESPONSE_TIME,
            link: None,
            accent: "text-glow",
        },
    ]
}
