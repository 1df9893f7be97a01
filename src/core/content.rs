// Static site content. Edit here; the views only lay it out.

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MISSION_VALUES: &[Value] = &[
    Value {
        title: "Mission-Driven",
        description: "Advancing human augmentation through innovative exoskeleton technology",
    },
    Value {
        title: "Research-Focused",
        description: "Pioneering solutions at the intersection of robotics, biomechanics, and AI",
    },
    Value {
        title: "Collaborative",
        description: "Bringing together diverse engineering disciplines to solve complex challenges",
    },
    Value {
        title: "Competition-Proven",
        description: "Competing at the highest levels of robotics and exoskeleton engineering",
    },
];

pub struct Project {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Percent complete.
    pub progress: u8,
    pub status: &'static str,
    pub image: &'static str,
    pub specs: &'static [&'static str],
    pub team: &'static str,
}

pub const PROJECTS: &[Project] = &[Project {
    name: "APEX-1 Full Body Exoskeleton",
    category: "Flagship Project",
    description: "Advanced full-body powered exoskeleton designed for heavy lifting applications and endurance enhancement.",
    progress: 40,
    status: "In Development",
    image: "https://images.pexels.com/photos/8566472/pexels-photo-8566472.jpeg?auto=compress&cs=tinysrgb&w=800",
    specs: &[
        "Max Load Capacity: 150 kg",
        "Battery Life: 8 hours",
        "Weight: 45 kg",
        "Actuators: 12 DOF",
    ],
    team: "Mechanical, Electrical, Software",
}];

pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
}

pub struct TeamSection {
    pub title: &'static str,
    pub members: &'static [Member],
}

const fn member(name: &'static str, role: &'static str, department: &'static str) -> Member {
    Member {
        name,
        role,
        department,
    }
}

pub const TEAM: &[TeamSection] = &[
    TeamSection {
        title: "Executive Leadership",
        members: &[
            member("Sarah Chen", "President & Chief Engineer", "Mechanical Engineering"),
            member("Marcus Johnson", "Vice President", "Electrical Engineering"),
            member("Priya Patel", "Technical Director", "Computer Science"),
            member("David Kim", "Operations Manager", "Industrial Engineering"),
        ],
    },
    TeamSection {
        title: "Mechanical Engineering",
        members: &[
            member("Alex Rivera", "Lead Mechanical Engineer", "Mechanical Engineering"),
            member("Emily Zhang", "Structural Design Lead", "Mechanical Engineering"),
            member("James Wilson", "Manufacturing Lead", "Mechanical Engineering"),
        ],
    },
    TeamSection {
        title: "Electrical Engineering",
        members: &[
            member("Ryan Cooper", "Lead Electrical Engineer", "Electrical Engineering"),
            member("Sophia Martinez", "Power Systems Lead", "Electrical Engineering"),
            member("Liam Brown", "Sensor Integration Lead", "Electrical Engineering"),
        ],
    },
    TeamSection {
        title: "Software & ML/AI",
        members: &[
            member("Kevin Nguyen", "Lead Software Engineer", "Computer Science"),
            member("Isabella Garcia", "ML/AI Research Lead", "Data Science"),
            member("Nathan Lee", "Control Systems Engineer", "Computer Engineering"),
        ],
    },
];

pub const ABOUT_STORY: &[&str] = &[
    "EXOTU was established by a group of mechanical, electrical, and software engineering students who shared a vision: to make powered exoskeletons accessible, functional, and impactful.",
    "What started as a senior design project quickly evolved into a research organization spanning multiple engineering disciplines.",
    "Our team competes at robotics competitions and is recognized for technical innovation, design excellence, and real-world impact.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Platinum => "Platinum",
            Tier::Gold => "Gold",
            Tier::Silver => "Silver",
            Tier::Bronze => "Bronze",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Tier::Platinum => "tier-platinum",
            Tier::Gold => "tier-gold",
            Tier::Silver => "tier-silver",
            Tier::Bronze => "tier-bronze",
        }
    }
}

pub const SPONSORS: &[(Tier, &[&str])] = &[
    (Tier::Platinum, &["Your Company Here"]),
    (Tier::Gold, &["Gold Partner"]),
    (Tier::Silver, &["Silver Partner"]),
    (Tier::Bronze, &["Bronze Partner"]),
];

pub struct GalleryCategory {
    pub category: &'static str,
    pub images: &'static [&'static str],
}

pub const GALLERY: &[GalleryCategory] = &[
    GalleryCategory {
        category: "Competition",
        images: &[
            "https://images.pexels.com/photos/8566472/pexels-photo-8566472.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg?auto=compress&cs=tinysrgb&w=800",
        ],
    },
    GalleryCategory {
        category: "Lab Work",
        images: &[
            "https://images.pexels.com/photos/8853502/pexels-photo-8853502.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/8439093/pexels-photo-8439093.jpeg?auto=compress&cs=tinysrgb&w=800",
        ],
    },
    GalleryCategory {
        category: "Testing",
        images: &[
            "https://images.pexels.com/photos/7551666/pexels-photo-7551666.jpeg?auto=compress&cs=tinysrgb&w=800",
            "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=800",
        ],
    },
];

pub struct Post {
    pub title: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
    pub read_time: &'static str,
}

pub const POSTS: &[Post] = &[
    Post {
        title: "Breakthrough in Actuator Efficiency: 40% Power Reduction",
        author: "Dr. Michael Park",
        date: "March 15, 2024",
        category: "Research",
        excerpt: "Our team reduced actuator power consumption by 40% while maintaining force output, which could extend battery life in portable exoskeleton systems.",
        read_time: "8 min read",
    },
    Post {
        title: "Neural Control Interface: Machine Learning Meets Biomechanics",
        author: "Isabella Garcia",
        date: "February 28, 2024",
        category: "AI/ML",
        excerpt: "Combining EMG signal processing with neural networks to build an intuitive control interface for assisted motion.",
        read_time: "12 min read",
    },
    Post {
        title: "Materials Science Innovation: Lightweight Carbon Fiber Composite",
        author: "Daniel White",
        date: "February 15, 2024",
        category: "Materials",
        excerpt: "A custom carbon fiber composite that cuts frame weight while increasing structural integrity.",
        read_time: "10 min read",
    },
];

pub const JOIN_BENEFITS: &[&str] = &[
    "Hands-on experience with cutting-edge robotics technology",
    "Collaborative environment with multidisciplinary teams",
    "Access to lab facilities and equipment",
    "Opportunities to compete in international competitions",
    "Build your portfolio with real engineering projects",
];

pub const JOIN_REQUIREMENTS: &[&str] = &[
    "Currently enrolled as an Ontario Tech University student",
    "Passionate about robotics and human augmentation",
    "Ability to commit 8-10 hours per week",
    "No prior experience required for entry-level positions",
];

pub const YEARS_OF_STUDY: &[(&str, &str)] = &[
    ("first", "First Year"),
    ("second", "Second Year"),
    ("third", "Third Year"),
    ("fourth", "Fourth Year"),
    ("graduate", "Graduate"),
];
