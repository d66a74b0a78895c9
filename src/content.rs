//! Everything the portfolio pages render. Plain static data, no I/O.

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub resume_path: &'static str,
    pub resume_file_name: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Roshan",
    last_name: "Moger",
    title: "Associate Software Engineer",
    tagline: "Frontend Developer with 2+ years crafting enterprise-scale SPAs. Passionate about creating beautiful, interactive experiences.",
    email: "roshanmoger502@gmail.com",
    phone: "+91-8970035508",
    location: "Mysore, India",
    resume_path: "/Roshan_Moger_Resume.pdf",
    resume_file_name: "Roshan_Moger_Resume.pdf",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Roshan-moger",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/roshan-moger",
    },
];

/// Navigation entries as `(section anchor, label)`.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Frontend Developer with over 2 years of experience crafting intuitive and performant web applications. My expertise lies in building scalable solutions using React.js, Redux Toolkit, and Tailwind CSS.",
    "I've worked extensively in EdTech and Event Management domains, developing component libraries, authentication systems, and real-time collaborative features.",
    "My focus is on delivering enterprise-grade user interfaces that combine exceptional user experience with clean, maintainable code architecture.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "2+",
        label: "Years Experience",
    },
    Stat {
        value: "10+",
        label: "Projects Delivered",
    },
    Stat {
        value: "7.8",
        label: "CGPA",
    },
    Stat {
        value: "∞",
        label: "Learning Appetite",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "B.E. in Electrical & Electronics Engineering",
    institution: "NIE Institute of Technology, Mysore",
    period: "2019-2023",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub current: bool,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Associate Software Engineer",
        company: "ExcelSoft Technologies Ltd",
        location: "Mysore",
        period: "May 2024 – Present",
        description: "Building enterprise-scale React.js applications for EdTech platforms, including projects such as Saras Standard Platform, Owlbot (a web-based platform for discovering, generating, and managing copyright-compliant content for websites), and SVKM Platform.",
        highlights: &[
            "Developed React.js SPAs with optimized UI responsiveness and load performance",
            "Created and maintained shared reusable React component library",
            "Implemented secure JWT-based authentication with refresh token handling",
            "Built real-time features using WebSockets including live proctoring",
            "Managed complex state using Redux Toolkit across multiple modules",
        ],
        current: true,
    },
    Experience {
        role: "Software Development Intern",
        company: "Kodnest Technologies Pvt. Ltd.",
        location: "Remote",
        period: "August 2023 – April 2024",
        description: "Full-stack development training with hands-on project experience",
        highlights: &[
            "Completed Java Full Stack training covering Core Java, JDBC, Servlets, SQL",
            "Built and tested full-stack modules with real-world applications",
            "Collaborated using Git/GitHub following version control best practices",
            "Gained end-to-end software development workflow understanding",
        ],
        current: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Event Management Platform",
        description: "A Progressive Web Application designed for creating, booking, and managing events with role-based access, real-time updates, and a seamless user experience across devices.",
        image: "/images/event-manage.svg",
        tech: &[
            "React.js",
            "PWA",
            "QR Code",
            "Scanning",
            "Redux",
            "JWT",
            "Map Integration",
            "Seat Booking",
        ],
        category: "Front End",
        github: Some("https://github.com/Roshan-moger/booking-event"),
        demo: Some("https://spotfront.app.codevicesolution.in/"),
    },
    Project {
        title: "Real-time Expense Tracker",
        description: "A full-stack MERN application that helps users track income and expenses in real time, featuring secure authentication, automated data processing, and insightful monthly summaries.",
        image: "/images/expense-tracker.svg",
        tech: &[
            "MongoDB",
            "Express",
            "React.js",
            "Node.js",
            "IMAP",
            "Redux Toolkit",
            "JWT",
        ],
        category: "Full Stack",
        github: Some("https://github.com/Roshan-moger/track-expense"),
        demo: Some("https://spendvault.netlify.app/"),
    },
    Project {
        title: "Renting Car Application",
        description: "A modern and user-friendly car rental platform that enables users to browse vehicles, check availability, and rent cars on a daily or weekly basis with a smooth booking experience.",
        image: "/images/car-rent.svg",
        tech: &["React.js", "Tailwind CSS"],
        category: "Front End",
        github: Some("https://github.com/Roshan-moger/Car-rent"),
        demo: Some("https://roshan-car-rent-app.netlify.app/"),
    },
    Project {
        title: "Freelancer Portfolio Website",
        description: "A clean and responsive portfolio website built for freelancers and professionals to showcase their skills, projects, and experience with a customizable and reusable layout.",
        image: "/images/portfolio.svg",
        tech: &["HTML", "CSS", "JavaScript"],
        category: "Front End",
        github: Some("https://github.com/Roshan-moger/Harish"),
        demo: Some("https://harishmoger.netlify.app/"),
    },
    Project {
        title: "Quiz App",
        description: "An interactive and responsive quiz application designed for students, featuring topic-wise quizzes in Python, Java, and Aptitude. The app provides a smooth user experience with real-time question navigation, score tracking, and a clean, modern UI.",
        image: "/images/quiz.svg",
        tech: &["React JS", "Tailwind CSS", "Axios"],
        category: "Front End",
        github: Some("https://github.com/Roshan-moger/Quiz-App"),
        demo: Some("https://quiz-app-seven-phi-63.vercel.app"),
    },
];

/// `"All"` followed by every distinct category, in order of first appearance.
pub fn project_categories(projects: &[Project]) -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for project in projects {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

pub const CORE_SKILLS: &[&str] = &[
    "React.js",
    "TypeScript",
    "JavaScript",
    "Tailwind CSS",
    "Redux",
    "Bootstrap",
    "Java (Core)",
    "Java Spring Boot (MVC)",
    "Node.js",
    "Express.js",
    "REST APIs",
    "Databases",
];

pub const TECH_STACK: &[&str] = &[
    "Redux Toolkit",
    "Node",
    "Git & GitHub",
    "MongoDB",
    "PostgreSQL",
    "HTML5",
    "CSS3",
    "VS Code",
    "Postman",
    "Eclipse",
    "ChatGPT",
    "Vercel",
    "Netlify",
];
