use crate::showcase::{
    AboutSection, CertificationCard, ContactLink, ContactSection, EducationCard, FooterSection,
    HeroSection, LinkedTechnology, ProjectCard, ProjectDetail, ShowcasePage, SkillCategory,
    SkillLevel, UpcomingProjectCard,
};

const NAME: &str = "Alex Chen";
const TITLE: &str = "Data Science Student & Machine Learning Enthusiast";

pub(crate) const HERO: HeroSection = HeroSection {
    name: NAME,
    title: TITLE,
    description: "Third-year Computer Science Engineering student specializing in Data Science. \
        Passionate about turning data into insights and building intelligent systems that solve \
        real-world problems.",
    actions: &["Get In Touch", "Download CV"],
};

pub(crate) const ABOUT: AboutSection = AboutSection {
    heading: "About Me",
    tagline: "Passionate about leveraging data to create meaningful solutions",
    paragraphs: &[
        "I'm a third-year Computer Science Engineering student with a specialization in Data \
         Science. My journey began with a curiosity about how data shapes our world, and it has \
         evolved into a passion for machine learning, statistical analysis, and building \
         predictive models.",
        "Through my coursework and personal projects, I've gained experience in Python, R, SQL, \
         and various ML frameworks. I enjoy tackling complex problems and finding innovative \
         solutions through data-driven approaches.",
    ],
    highlights: &[
        "Currently maintaining a 3.8 GPA with focus on Machine Learning, Statistics, and Database Systems.",
        "Completed 15+ data science projects including predictive modeling and data visualization.",
        "Always exploring new technologies and methodologies in AI/ML and data science.",
    ],
    interests: &[
        "Machine Learning",
        "Data Visualization",
        "Deep Learning",
        "Statistical Analysis",
        "Open Source",
        "Research",
        "Competitive Programming",
        "Tech Blogs",
        "Photography",
    ],
};

const fn skill(name: &'static str, level: u8) -> SkillLevel {
    SkillLevel { name, level }
}

pub(crate) const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        skills: &[
            skill("Python", 90),
            skill("R", 85),
            skill("SQL", 80),
            skill("JavaScript", 75),
            skill("Java", 70),
            skill("C++", 65),
        ],
    },
    SkillCategory {
        title: "Data Science & ML",
        skills: &[
            skill("Scikit-learn", 85),
            skill("Pandas", 90),
            skill("NumPy", 88),
            skill("TensorFlow", 75),
            skill("PyTorch", 70),
            skill("Keras", 80),
        ],
    },
    SkillCategory {
        title: "Data Visualization",
        skills: &[
            skill("Matplotlib", 85),
            skill("Seaborn", 82),
            skill("Plotly", 78),
            skill("Tableau", 75),
            skill("Power BI", 70),
            skill("D3.js", 60),
        ],
    },
    SkillCategory {
        title: "Databases & Tools",
        skills: &[
            skill("MySQL", 80),
            skill("PostgreSQL", 75),
            skill("MongoDB", 70),
            skill("Git", 85),
            skill("Docker", 65),
            skill("AWS", 60),
        ],
    },
];

pub(crate) const SKILL_CERTIFICATIONS: &[&str] = &[
    "Google Data Analytics Certificate",
    "IBM Data Science Professional Certificate",
    "Machine Learning Coursera Specialization",
    "Python for Data Science (edX)",
    "Statistical Learning (Stanford Online)",
];

pub(crate) const TECHNOLOGIES: &[&str] = &[
    "Python", "R", "SQL", "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy", "Jupyter",
    "Git", "Docker", "AWS", "Tableau", "Power BI", "MongoDB", "PostgreSQL", "Apache Spark",
    "Hadoop", "Kafka", "Linux", "REST APIs", "Flask", "Django",
];

pub(crate) const EDUCATION: &[EducationCard] = &[
    EducationCard {
        institution: "University of California, Berkeley",
        degree: "Bachelor of Engineering in Computer Science Engineering",
        specialization: Some("Data Science"),
        duration: "2022 - 2026 (Expected)",
        gpa: "3.8/4.0",
        status: "Current",
        description: "Specializing in Data Science with focus on Machine Learning, Statistical \
            Analysis, and Big Data Technologies.",
        courses: &[
            "Machine Learning",
            "Deep Learning",
            "Statistical Inference",
            "Data Mining",
            "Database Systems",
            "Algorithms & Data Structures",
            "Big Data Analytics",
            "Computer Vision",
            "Natural Language Processing",
        ],
        achievements: &[
            "Dean's List (Fall 2023, Spring 2024)",
            "Data Science Club Vice President",
            "Outstanding Project Award - ML Course",
        ],
    },
    EducationCard {
        institution: "Lincoln High School",
        degree: "High School Diploma",
        specialization: Some("STEM Track"),
        duration: "2018 - 2022",
        gpa: "3.95/4.0",
        status: "Completed",
        description: "Graduated Summa Cum Laude with focus on Mathematics, Physics, and Computer \
            Science.",
        courses: &[
            "AP Computer Science A",
            "AP Statistics",
            "AP Calculus BC",
            "AP Physics C",
            "Advanced Mathematics",
            "Introduction to Programming",
        ],
        achievements: &[
            "Valedictorian",
            "National Honor Society",
            "Math Olympiad State Qualifier",
            "Science Fair First Place",
        ],
    },
];

pub(crate) const CERTIFICATIONS: &[CertificationCard] = &[
    CertificationCard {
        title: "Google Data Analytics Professional Certificate",
        issuer: "Google (via Coursera)",
        date: "September 2024",
        skills: &["Data Analysis", "SQL", "Tableau", "R Programming"],
    },
    CertificationCard {
        title: "IBM Data Science Professional Certificate",
        issuer: "IBM (via Coursera)",
        date: "August 2024",
        skills: &["Python", "Machine Learning", "Data Visualization", "SQL"],
    },
    CertificationCard {
        title: "Machine Learning Specialization",
        issuer: "Stanford University (via Coursera)",
        date: "July 2024",
        skills: &["Supervised Learning", "Unsupervised Learning", "Deep Learning"],
    },
    CertificationCard {
        title: "AWS Cloud Practitioner",
        issuer: "Amazon Web Services",
        date: "June 2024",
        skills: &["Cloud Computing", "AWS Services", "Data Storage"],
    },
];

const fn tech(label: &'static str, link: &'static str) -> LinkedTechnology {
    LinkedTechnology { label, link }
}

/// Detail records behind the featured project cards. Ids are positional.
pub(crate) const PROJECT_DETAILS: &[ProjectDetail] = &[
    ProjectDetail {
        id: "1",
        title: "Predictive Healthcare Analytics",
        description: "Machine learning model to predict patient readmission rates using clinical \
            data. Achieved 87% accuracy using ensemble methods and feature engineering techniques.",
        full_description: "This comprehensive machine learning project focuses on predicting \
            patient readmission rates using clinical data from multiple healthcare institutions. \
            The project involved extensive data preprocessing, feature engineering, and model \
            selection to achieve optimal performance.\n\nKey achievements include:\n\
            • Developed and deployed ensemble models with 87% accuracy\n\
            • Processed over 100,000 patient records\n\
            • Implemented advanced feature engineering techniques\n\
            • Created interactive dashboards for healthcare professionals\n\
            • Reduced false positive rates by 23% compared to existing models\n\n\
            The solution helps healthcare providers identify high-risk patients early, enabling \
            proactive interventions and ultimately improving patient outcomes while reducing \
            healthcare costs.",
        technologies: &[
            tech("Python", "https://python.org"),
            tech("Scikit-learn", "https://scikit-learn.org"),
            tech("Pandas", "https://pandas.pydata.org"),
            tech("XGBoost", "https://xgboost.readthedocs.io"),
            tech("Flask", "https://flask.palletsprojects.com"),
        ],
        github: "https://github.com/example/healthcare-analytics",
        demo: "https://healthcare-demo.example.com",
        website: "https://healthcare-project.example.com",
        date: "Dec 2024",
        category: "Machine Learning",
        status: "Completed",
        duration: "6 months",
        team_size: "4 members",
    },
    ProjectDetail {
        id: "2",
        title: "Neural Network Visualization Tool",
        description: "Interactive web application for visualizing neural network architectures \
            and training processes. Built with React and D3.js for dynamic data visualization.",
        full_description: "An innovative web application designed to demystify neural networks \
            through interactive visualizations. This tool allows users to explore different \
            network architectures, observe training processes in real-time, and understand how \
            various parameters affect model performance.\n\nFeatures include:\n\
            • Real-time visualization of neural network training\n\
            • Interactive architecture builder\n\
            • Performance metrics dashboard\n\
            • Support for multiple network types (CNN, RNN, Transformer)\n\
            • Educational modules and tutorials\n\
            • Export capabilities for research and presentations\n\n\
            The tool has been adopted by several educational institutions and has helped over \
            10,000 students better understand deep learning concepts through visual learning.",
        technologies: &[
            tech("React", "https://react.dev"),
            tech("D3.js", "https://d3js.org"),
            tech("TensorFlow.js", "https://tensorflow.org/js"),
            tech("Python", "https://python.org"),
            tech("FastAPI", "https://fastapi.tiangolo.com"),
        ],
        github: "https://github.com/example/nn-visualization",
        demo: "https://nn-viz-demo.example.com",
        website: "https://nn-visualization.example.com",
        date: "Nov 2024",
        category: "Deep Learning",
        status: "Completed",
        duration: "4 months",
        team_size: "3 members",
    },
    ProjectDetail {
        id: "3",
        title: "Real-time Sales Dashboard",
        description: "End-to-end data pipeline and dashboard for real-time sales analytics. \
            Processes streaming data and provides actionable business insights.",
        full_description: "A comprehensive real-time analytics solution that transforms raw \
            sales data into actionable business insights. The system processes millions of \
            transactions daily, providing stakeholders with up-to-the-minute analytics and \
            predictive insights.\n\nSystem capabilities:\n\
            • Real-time data ingestion from multiple sources\n\
            • Advanced analytics and predictive modeling\n\
            • Interactive dashboards with drill-down capabilities\n\
            • Automated alert systems for anomaly detection\n\
            • Mobile-responsive design for on-the-go access\n\
            • Integration with existing CRM and ERP systems\n\n\
            The dashboard has improved decision-making speed by 40% and helped identify new \
            revenue opportunities worth $2M annually. The system handles peak loads of 10,000+ \
            transactions per minute with sub-second latency.",
        technologies: &[
            tech("Python", "https://python.org"),
            tech("Apache Kafka", "https://kafka.apache.org"),
            tech("PostgreSQL", "https://postgresql.org"),
            tech("Tableau", "https://tableau.com"),
            tech("Docker", "https://docker.com"),
        ],
        github: "https://github.com/example/sales-dashboard",
        demo: "https://sales-demo.example.com",
        website: "https://sales-dashboard.example.com",
        date: "Oct 2024",
        category: "Data Engineering",
        status: "Completed",
        duration: "8 months",
        team_size: "6 members",
    },
];

pub(crate) const UPCOMING_PROJECTS: &[UpcomingProjectCard] = &[
    UpcomingProjectCard {
        title: "NLP Sentiment Analysis API",
        description: "RESTful API for multi-language sentiment analysis using transformer models",
        technologies: &["Python", "Transformers", "FastAPI", "Docker"],
        status: "In Progress",
    },
    UpcomingProjectCard {
        title: "Computer Vision Art Classifier",
        description: "CNN model to classify art styles and periods from paintings",
        technologies: &["PyTorch", "OpenCV", "Streamlit", "AWS"],
        status: "Planning",
    },
];

pub(crate) const CONTACT: ContactSection = ContactSection {
    heading: "Get In Touch",
    blurb: "I'm always open to discussing new opportunities, interesting projects, or potential \
        collaborations in the field of data science and machine learning. Whether you're a \
        recruiter, fellow student, or someone passionate about data, I'd love to hear from you!",
    links: &[
        ContactLink {
            label: "Email",
            value: "alex.chen@email.com",
            href: "mailto:alex.chen@email.com",
        },
        ContactLink {
            label: "Phone",
            value: "+1 (555) 123-4567",
            href: "tel:+15551234567",
        },
        ContactLink {
            label: "Location",
            value: "San Francisco, CA",
            href: "#",
        },
        ContactLink {
            label: "LinkedIn",
            value: "/in/alexchen-ds",
            href: "https://linkedin.com/in/alexchen-ds",
        },
        ContactLink {
            label: "GitHub",
            value: "/alexchen-data",
            href: "https://github.com/alexchen-data",
        },
    ],
};

pub(crate) const FOOTER: FooterSection = FooterSection {
    name: NAME,
    blurb: "Data Science student passionate about turning data into insights and building \
        intelligent systems that make a difference.",
    quick_links: &[
        ("About", "#about"),
        ("Skills", "#skills"),
        ("Projects", "#projects"),
        ("Education", "#education"),
        ("Contact", "#contact"),
    ],
    availability: "Available for opportunities",
};

/// Builds the full single-page layout from the constants above.
pub(crate) fn page() -> ShowcasePage {
    ShowcasePage {
        hero: HERO,
        about: ABOUT,
        skills: SKILL_CATEGORIES,
        skill_certifications: SKILL_CERTIFICATIONS,
        technologies: TECHNOLOGIES,
        education: EDUCATION,
        certifications: CERTIFICATIONS,
        projects: PROJECT_DETAILS.iter().map(ProjectCard::from).collect(),
        upcoming_projects: UPCOMING_PROJECTS,
        contact: CONTACT,
        footer: FOOTER,
    }
}
