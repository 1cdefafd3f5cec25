use crate::{
    ArchitectureLayer, BillOfMaterials, Blurb, BomItem, BusinessGoals, HardwareSpec, HeroContent,
    HeroStat, Milestone, NavItem, NavKind, ProblemCard, ProtocolSpec, Quantity, SiteMetadata,
    SolutionFeature, StatTile, TeamMember,
};

/// Anchorable sections of the home page, in reading order.
pub const HOME_SECTION_IDS: [&str; 6] = [
    "overview",
    "problem",
    "solution",
    "architecture",
    "goals",
    "github",
];

pub const NAVIGATION: &[NavItem] = &[
    NavItem { label: "Overview", href: "overview", kind: NavKind::Section },
    NavItem { label: "Problem", href: "problem", kind: NavKind::Section },
    NavItem { label: "Solution", href: "solution", kind: NavKind::Section },
    NavItem { label: "Architecture", href: "architecture", kind: NavKind::Section },
    NavItem { label: "Goals", href: "goals", kind: NavKind::Section },
    NavItem { label: "Team", href: "/team", kind: NavKind::Page },
    NavItem { label: "BOM", href: "/bom", kind: NavKind::Page },
];

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "Hush | IIoT Digital Nursery",
    description: "Next-level caring for Neonatal Intensive Care Units using AI-powered crying analytics and medical-grade sensors.",
    language: "en",
    canonical_url: "https://hush.digital-nursery",
    site_name: "Hush IIoT Digital Nursery",
};

pub const CONTACT_EMAIL: &str = "contact@hush.care";
pub const LOGO_SRC: &str = "/logo.svg";
pub const RELEASE_BADGE: &str = "Beta Release • v1.0.1";

pub const HERO_CONTENT: HeroContent = HeroContent {
    headline: "Next-Level Caring for Neonatal Intensive Care",
    subheadline: "A 24/7 IoT Based Monitoring System ensuring critical medical monitoring and intervention for newborns.",
    cta_text: "Discover the Solution",
    background_context: "Neonatal Intensive Care Units need critical 24/7 medical monitoring and intervention for the 10-15% of newborns who suffer from serious health complications.",
};

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        label: "Continuous Monitoring",
        value: "24/7",
        caption: "IoT-based coverage for critical newborn intervention",
    },
    HeroStat {
        label: "High-Risk Infants",
        value: "10-15%",
        caption: "Newborns requiring NICU-grade intervention",
    },
    HeroStat {
        label: "System Layers",
        value: "4",
        caption: "Perception to application architecture",
    },
];

pub const HERO_MASCOT_SRC: &str = "/images/bear.png";

pub const PROBLEM_SECTION_TITLE: &str = "Current Problems in NICU";

pub const PROBLEM_CARDS: &[ProblemCard] = &[
    ProblemCard {
        id: "noise",
        title: "NICU Noisy Environment",
        description: "High noise levels create a stressful environment for infants and staff.",
    },
    ProblemCard {
        id: "manual",
        title: "Manual Assessments",
        description: "Reliance on periodic checks rather than continuous automated monitoring.",
    },
    ProblemCard {
        id: "tracking",
        title: "Only Track Vital Sign",
        description: "Current systems often lack contextual data, tracking only basic vitals without environmental or audio context.",
    },
    ProblemCard {
        id: "interpretation",
        title: "Misinterpreted Infant Cry",
        description: "Difficulty in accurately understanding the specific needs behind an infant's cry.",
    },
];

pub const SOLUTION_SECTION_TITLE: &str = "The Hush Ecosystem";

pub const SOLUTION_FEATURES: &[SolutionFeature] = &[
    SolutionFeature {
        component: "Hush Smart Bracelet",
        kind: "Wearable",
        description: "A medical-grade sensor device worn by the infant.",
        key_features: &[
            "Next-level caring mascot design",
            "Swappable Charm",
            "Low Power Consumption",
            "All-day battery life",
        ],
        capabilities: &[],
    },
    SolutionFeature {
        component: "Hush Baby Box",
        kind: "Edge Device",
        description: "Responsible for detecting baby box temperature, humidity, and monitoring baby sound and voice.",
        key_features: &[],
        capabilities: &[],
    },
];

pub const ARCHITECTURE_TITLE: &str = "System Architecture & Technology";

pub const ARCHITECTURE_LAYERS: &[ArchitectureLayer] = &[
    ArchitectureLayer {
        layer_name: "Perception Layer",
        role: "Responsible for detecting and collecting physical data from the baby's environment.",
        hardware_specs: &[
            HardwareSpec {
                device: "Smart Bracelet",
                microcontroller: "ESP 32 DevKit",
                sensors: &["MAX30102 (Heart Rate, Blood Oxygen)"],
            },
            HardwareSpec {
                device: "Baby Box",
                microcontroller: "Arduino Nano",
                sensors: &["Temperature", "Humidity", "Audio/Microphone"],
            },
        ],
        protocols: &[],
        tech_stack: &[],
    },
    ArchitectureLayer {
        layer_name: "Network Layer",
        role: "Ensures super reliable connection and data transfer.",
        hardware_specs: &[],
        protocols: &[
            ProtocolSpec {
                protocol: "BLE (Bluetooth Low Energy)",
                function: "Transfers data from wearable sensors to the fog node",
            },
            ProtocolSpec {
                protocol: "MQTT",
                function: "Sends processed data from the fog node to the cloud backend",
            },
        ],
        tech_stack: &[],
    },
    ArchitectureLayer {
        layer_name: "Middleware Layer (Fog Service)",
        role: "Performs Edge AI inference and anomaly detection.",
        hardware_specs: &[],
        protocols: &[],
        tech_stack: &[
            "Fog Service Architecture",
            "Structured Payload {JSON}",
            "Realtime Classifier Model: TFLite",
        ],
    },
    ArchitectureLayer {
        layer_name: "Application Layer (Cloud Service)",
        role: "Data storage, deployment, and user interface.",
        hardware_specs: &[],
        protocols: &[],
        tech_stack: &[
            "NextJS",
            "NestJS",
            "Redis",
            "PostgreSQL",
            "InfluxDB",
            "Cloud Backend with containerized microservices",
        ],
    },
];

pub const BUSINESS_GOALS: BusinessGoals = BusinessGoals {
    title: "Business Goals",
    objectives: &[
        "Enhance infant safety through automated monitoring.",
        "Reduce nurse workload via smart alerts and analytics.",
        "Enable centralized neonatal care and long-term data tracking.",
    ],
};

pub const ROADMAP: &[Milestone] = &[
    Milestone {
        year: "2024",
        title: "Foundation",
        description: "Establishing core research partnerships and securing initial IRB approvals for data collection.",
        hospitals: 0,
        active_users: 0,
        parents_helped: 0,
        parent_support: "Research phase.",
    },
    Milestone {
        year: "2025",
        title: "Pilot Launch",
        description: "Initial deployment in 1 partner Level II NICU to validate clinical accuracy and user experience.",
        hospitals: 1,
        active_users: 12,
        parents_helped: 30,
        parent_support: "Concierge support for first pilot NICU.",
    },
    Milestone {
        year: "2026",
        title: "Early Adoption",
        description: "Expansion to 3 additional community NICUs to gather diverse clinical data and refine algorithms.",
        hospitals: 4,
        active_users: 45,
        parents_helped: 150,
        parent_support: "Automated insights and localized support.",
    },
    Milestone {
        year: "2030",
        title: "Regional Expansion",
        description: "Adoption by 15 regional hospitals, integrating with existing nurse call systems and workflows.",
        hospitals: 15,
        active_users: 250,
        parents_helped: 1200,
        parent_support: "App-based updates for parents.",
    },
    Milestone {
        year: "2050",
        title: "Standard of Care",
        description: "Standard of care in 60+ NICUs across the state, with full EHR integration.",
        hospitals: 60,
        active_users: 1800,
        parents_helped: 15000,
        parent_support: "Full app ecosystem integration.",
    },
];

pub const TEAM_SECTION_TITLE: &str = "People behind this works";

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember { name: "Gerald", role: "AI Engineer", portrait_id: "1500648767791-00dcc994a43e" },
    TeamMember { name: "Satya", role: "Hardware Specialist", portrait_id: "1472099645785-5658abf4ff4e" },
    TeamMember { name: "Jade", role: "System Analyst", portrait_id: "1438761681033-6461ffad8d80" },
    TeamMember { name: "Ari", role: "Software Engineer", portrait_id: "1507003211169-0a1dd7228f2d" },
];

pub const TEAM_PRINCIPLES: &[Blurb] = &[
    Blurb {
        title: "Clinical empathy",
        body: "We build alongside neonatologists, translating bedside rituals into ambient intelligence.",
    },
    Blurb {
        title: "Systems rigor",
        body: "Fog, firmware, and frontends are engineered together so every alert is trusted.",
    },
    Blurb {
        title: "Long arc vision",
        body: "Each release compounds into a Taiwan-wide neonatal nervous system by 2050.",
    },
];

pub const TEAM_HIGHLIGHTS: &[StatTile] = &[
    StatTile { label: "Disciplines", value: "4", caption: "AI · Hardware · Cloud · Clinical" },
    StatTile { label: "Pilots", value: "7", caption: "Across Taipei & Taichung" },
    StatTile { label: "Languages", value: "5", caption: "English · Mandarin · Bahasa" },
    StatTile { label: "Coverage goal", value: "2050", caption: "All Taiwan NICUs" },
];

pub const BILL_OF_MATERIALS: BillOfMaterials = BillOfMaterials {
    title: "Bill of Material",
    currency: "NT$",
    items: &[
        BomItem {
            part: "Arduino Nano 33 BLE Sense",
            spec: "BLE + built-in sensors, 3.3V logic",
            qty: Quantity::Count(1),
            price: "1500",
            total_cost: 1500,
        },
        BomItem {
            part: "ESP32 Devkit V1",
            spec: "ESP32 development board",
            qty: Quantity::Count(1),
            price: "400",
            total_cost: 400,
        },
        BomItem {
            part: "MAX30102 Sensor",
            spec: "Heart rate + SpO2 sensor",
            qty: Quantity::Count(1),
            price: "100",
            total_cost: 100,
        },
        BomItem {
            part: "Battery 200mAh (Li-po)",
            spec: "3.7 V 200mAh",
            qty: Quantity::Count(1),
            price: "100",
            total_cost: 100,
        },
        BomItem {
            part: "ESP-01s",
            spec: "WiFi module (ESP8266), 1 MB flash",
            qty: Quantity::Count(1),
            price: "80",
            total_cost: 80,
        },
        BomItem {
            part: "Current Regulator AMS1117 3.3v",
            spec: "Linear regulator 5V → 3.3V",
            qty: Quantity::Count(1),
            price: "50",
            total_cost: 50,
        },
        BomItem {
            part: "TP4056 Charging Module",
            spec: "1 A Li-ion charger module",
            qty: Quantity::Count(1),
            price: "40",
            total_cost: 40,
        },
        BomItem {
            part: "USB Breakout Board / Electrolytic Capacitor",
            spec: "USB to 4 pins / 100µF 16V",
            qty: Quantity::Count(1),
            price: "40 / 10",
            total_cost: 50,
        },
        BomItem {
            part: "Switch",
            spec: "",
            qty: Quantity::Count(1),
            price: "20",
            total_cost: 20,
        },
        BomItem {
            part: "Ceramic Capacitor / LED / Resistor",
            spec: "Misc components",
            qty: Quantity::Text("Various"),
            price: "Misc",
            total_cost: 15,
        },
    ],
};

pub const BOM_HIGHLIGHTS: &[StatTile] = &[
    StatTile { label: "Lead time focus", value: "4-6 weeks", caption: "Assumes mixed local + online sourcing" },
    StatTile { label: "Refresh cycle", value: "Quarterly", caption: "Revisit sensors & firmware bills" },
];

pub const BOM_VALUE_POINTS: &[Blurb] = &[
    Blurb {
        title: "Clinical-grade sensing",
        body: "Wearable biometrics, cry/audio capture, and environmental sensing for each bed.",
    },
    Blurb {
        title: "Reliable edge & connectivity",
        body: "ESP32 + fog node with BLE/MQTT-ready pathways and room-level sharing.",
    },
    Blurb {
        title: "Certification-minded",
        body: "Enclosure, safety, and pre-compliance considerations baked into the plan.",
    },
];

pub const BOM_MATERIAL_GROUPS: &[Blurb] = &[
    Blurb {
        title: "Wearable & sensing",
        body: "Bracelet, biomedical sensors, cry + ambient audio, temperature/humidity. The core per-infant kit.",
    },
    Blurb {
        title: "Edge & connectivity",
        body: "BLE uplink to fog, MQTT to cloud; edge node can serve multiple beds.",
    },
    Blurb {
        title: "Enclosure & safety",
        body: "Cable management, ingress protection, thermal headroom; plan to meet clinical safety bars.",
    },
    Blurb {
        title: "Certification path",
        body: "Budget for EMC/EMI and biocompatibility checks; we can guide pre-compliance.",
    },
];

pub const PROCUREMENT_CHECKLIST: &[&str] = &[
    "Lock vendors for sensors and microcontrollers; verify lead times.",
    "Confirm enclosure specs (IP rating, thermal) before bulk purchase.",
    "Order 10-15% extra for bring-up, QA, and field spares.",
    "Plan certification pre-check (EMC/EMI) before scaling orders.",
];

pub const DEPLOYMENT_PHASES: &[Blurb] = &[
    Blurb {
        title: "Phase 1: Prototype (Weeks 1-2)",
        body: "Assemble wearables + baby box, validate sensing + firmware bring-up.",
    },
    Blurb {
        title: "Phase 2: Pilot (Weeks 3-6)",
        body: "Deploy 1-2 beds, test edge connectivity + dashboards, iterate enclosure.",
    },
    Blurb {
        title: "Phase 3: Scale (Weeks 6+)",
        body: "Lock vendors, initiate pre-cert checks, and roll out to remaining bays.",
    },
];

pub const REPOSITORY_URL: &str = "https://github.com/satyaadhiyaksaardy/SI5014701-iiot-course-hush";
pub const STARGAZERS_URL: &str =
    "https://github.com/satyaadhiyaksaardy/SI5014701-iiot-course-hush/stargazers";
pub const QR_CODE_SRC: &str = "/images/qr-code.svg";

pub const HERO_POSTER_SRC: &str = "https://images.unsplash.com/photo-1562408590-e32931084e23?ixlib=rb-4.1.0&auto=format&fit=crop&q=80&w=2070";
pub const PROBLEM_IMAGE_SRC: &str = "https://images.unsplash.com/photo-1516549655169-df83a0774514?q=80&w=2670&auto=format&fit=crop";
pub const SOLUTION_IMAGE_SRC: &str = "https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d?q=80&w=2653&auto=format&fit=crop";
pub const SOLUTION_OVERVIEW_IMAGE_SRC: &str = "https://images.unsplash.com/photo-1555774698-0b77e0d5fac6?q=80&w=2670&auto=format&fit=crop";
pub const SOLUTION_CARD_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?q=80&w=2670&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=2670&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2670&auto=format&fit=crop",
];
pub const ARCHITECTURE_IMAGE_SRC: &str = "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=2670&auto=format&fit=crop";
pub const GOALS_IMAGE_SRC: &str = "https://images.unsplash.com/photo-1519689680058-324335c77eba?q=80&w=2670&auto=format&fit=crop";
pub const BOM_IMAGE_SRC: &str = "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=2670&auto=format&fit=crop";

/// Every remote image referenced by the site, checked against the host allow-list.
pub const REMOTE_IMAGES: &[&str] = &[
    HERO_POSTER_SRC,
    PROBLEM_IMAGE_SRC,
    SOLUTION_IMAGE_SRC,
    SOLUTION_OVERVIEW_IMAGE_SRC,
    SOLUTION_CARD_IMAGES[0],
    SOLUTION_CARD_IMAGES[1],
    SOLUTION_CARD_IMAGES[2],
    ARCHITECTURE_IMAGE_SRC,
    GOALS_IMAGE_SRC,
    BOM_IMAGE_SRC,
];

pub const REMOTE_IMAGE_HOSTS: &[&str] = &["images.unsplash.com", "extropic.ai", "cdn.pixabay.com"];

/// True when `raw` is an `https` URL on one of [`REMOTE_IMAGE_HOSTS`].
pub fn is_allowed_image_url(raw: &str) -> bool {
    let Ok(parsed) = url::Url::parse(raw) else {
        return false;
    };
    parsed.scheme() == "https"
        && parsed
            .host_str()
            .is_some_and(|host| REMOTE_IMAGE_HOSTS.contains(&host))
}
