//! Static site copy: navigation, FAQ, testimonials, services, projects.
//!
//! Pages render these tables directly; list lengths size the accordion and
//! carousel state.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "Zenith";
pub const CONTACT_EMAIL: &str = "hello@zenithsolar.com";
pub const CONTACT_PHONE: &str = "1-800-555-0199";
pub const CONTACT_HOURS: &str = "Mon\u{2013}Fri, 8am\u{2013}6pm";
pub const SERVICE_AREA: &str = "Serving nationwide";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "About", href: "/about" },
    NavLink { label: "Services", href: "/services" },
    NavLink { label: "Projects", href: "/projects" },
    NavLink { label: "Contact", href: "/contact" },
];

#[derive(Clone, Copy, Debug)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "How long does installation take?",
        answer: "Most residential installations are completed within 1-3 days. The whole process, from signing to activation, typically takes 4-8 weeks including permits and utility approval.",
    },
    Faq {
        question: "Will it work on my roof type?",
        answer: "Solar panels work on most roof types including asphalt shingles, metal, tile, and flat roofs. During the free consultation we assess your roof's condition, angle, and sun exposure.",
    },
    Faq {
        question: "What financing options are available?",
        answer: "We offer cash purchase, solar loans, leases, and power purchase agreements. Many customers qualify for $0 down financing with low monthly payments.",
    },
    Faq {
        question: "Do you handle permits?",
        answer: "Yes. We handle all permits, utility interconnection agreements, and inspections, so you don't have to manage the paperwork.",
    },
    Faq {
        question: "What happens during a blackout?",
        answer: "Standard grid-tied systems shut off during outages for safety. With a battery storage system you can keep essential appliances running.",
    },
    Faq {
        question: "How do I monitor performance?",
        answer: "Every installation includes a monitoring app that tracks production, consumption, and savings in real time from your phone or computer.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub rating: u8,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The install was clean, the crew was respectful, and our bill dropped more than expected. We couldn't be happier with our decision to go solar with Zenith.",
        name: "Sarah & James Mitchell",
        role: "Homeowners, Austin TX",
        rating: 5,
        image: "/images/testimonial-couple.jpg",
    },
    Testimonial {
        quote: "Zenith made the entire process seamless. From the initial consultation to the final installation, everything was handled professionally. Our energy bills have been cut in half!",
        name: "Michael Chen",
        role: "Business Owner, San Diego CA",
        rating: 5,
        image: "/images/project-residence.jpg",
    },
    Testimonial {
        quote: "The monitoring app is fantastic. I can see exactly how much energy we're producing in real time. The team was knowledgeable and answered all our questions.",
        name: "Emily Rodriguez",
        role: "Homeowner, Phoenix AZ",
        rating: 5,
        image: "/images/services-home.jpg",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "We Design Your System",
        description: "We analyze your roof, usage, and local incentives, then build a plan that fits your budget.",
    },
    Step {
        number: "02",
        title: "Expert Installation",
        description: "Certified technicians install your system with precision and care for optimal performance.",
    },
    Step {
        number: "03",
        title: "Start Saving",
        description: "Once activated, you start generating clean energy and reducing your bills immediately.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub image: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        number: "01",
        title: "Solar Panel Installation",
        description: "Professional installation tailored to your site's conditions for maximum sunlight capture and energy performance.",
        features: ["Custom system design", "Premium tier-1 panels", "25-year warranty", "Permit handling"],
        image: "/images/service-installation.jpg",
    },
    Service {
        number: "02",
        title: "System Design & Engineering",
        description: "Custom solar solutions engineered for your energy needs, roof structure, and local climate.",
        features: ["3D roof analysis", "Energy modeling", "Shade analysis", "Code compliance"],
        image: "/images/service-design.jpg",
    },
    Service {
        number: "03",
        title: "Energy Storage Solutions",
        description: "Store excess solar energy for outages or peak rate periods with battery backup.",
        features: ["Tesla Powerwall", "LG batteries", "Backup power", "Time-of-use optimization"],
        image: "/images/service-storage.jpg",
    },
    Service {
        number: "04",
        title: "Maintenance & Monitoring",
        description: "Comprehensive maintenance plans and real-time monitoring keep your system at peak efficiency.",
        features: ["24/7 monitoring", "Annual inspections", "Panel cleaning", "Performance reports"],
        image: "/images/service-maintenance.jpg",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub location: &'static str,
    pub system_size: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub panels: u32,
    pub co2_saved: &'static str,
    pub savings: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Modern Eco-Estate",
        location: "Austin, TX",
        system_size: "12.4 kW",
        description: "Black-on-black panels integrated into a modern home, offsetting 100% of the property's energy usage.",
        image: "/images/project-eco-estate.jpg",
        panels: 32,
        co2_saved: "14.2 tons/yr",
        savings: "$2,400/yr",
    },
    Project {
        title: "Suburban Solar Plus Storage",
        location: "Denver, CO",
        system_size: "8.6 kW + 2 Powerwalls",
        description: "A solar array paired with dual battery storage so the lights stay on during winter grid outages.",
        image: "/images/project-storage.jpg",
        panels: 24,
        co2_saved: "9.8 tons/yr",
        savings: "$1,850/yr",
    },
    Project {
        title: "Commercial Roof Array",
        location: "Phoenix, AZ",
        system_size: "45.2 kW",
        description: "A flat-roof array for a manufacturing facility covering peak operational hours.",
        image: "/images/project-commercial.jpg",
        panels: 112,
        co2_saved: "52.4 tons/yr",
        savings: "$12,500/yr",
    },
    Project {
        title: "Historic Home Retrofit",
        location: "San Diego, CA",
        system_size: "6.2 kW",
        description: "Custom mounting added solar to a historic property within strict neighborhood guidelines.",
        image: "/images/project-historic.jpg",
        panels: 16,
        co2_saved: "7.1 tons/yr",
        savings: "$1,400/yr",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const COMPANY_STATS: [Stat; 4] = [
    Stat { value: "2,500+", label: "Installations" },
    Stat { value: "15+", label: "Years Experience" },
    Stat { value: "50MW", label: "Power Generated" },
    Stat { value: "4.9", label: "Customer Rating" },
];

#[derive(Clone, Copy, Debug)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [Value; 4] = [
    Value {
        title: "Save Money",
        description: "Cut energy bills, protect against rate hikes, and add long-term value to your property.",
    },
    Value {
        title: "25+ Year Savings",
        description: "Built to perform through decades of weather with industry-leading warranties.",
    },
    Value {
        title: "Smart Monitoring",
        description: "Track production and usage in real time from your phone.",
    },
    Value {
        title: "Eco-Friendly",
        description: "Reduce your carbon footprint and contribute to a cleaner planet.",
    },
];
