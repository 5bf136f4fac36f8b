// Static page content - every string rendered on the page lives here

/// The five navigable regions of the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Awakening,
    Audit,
    Amplification,
    Industries,
    Contact,
}

impl SectionId {
    /// Sections listed in the navigation bar (Contact is reached via the
    /// Partner pill and the CTA instead).
    pub const NAV: [SectionId; 4] = [
        SectionId::Awakening,
        SectionId::Audit,
        SectionId::Amplification,
        SectionId::Industries,
    ];

    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Awakening => "I. AWAKENING",
            SectionId::Audit => "II. AUDIT",
            SectionId::Amplification => "III. AMPLIFICATION",
            SectionId::Industries => "DIAGNOSTICS",
            SectionId::Contact => "PARTNER",
        }
    }

    /// Longer label used in the full-screen menu overlay.
    pub fn menu_label(self) -> &'static str {
        match self {
            SectionId::Awakening => "PHASE I : AWAKENING",
            SectionId::Audit => "PHASE II : AUDIT",
            SectionId::Amplification => "PHASE III : AMPLIFICATION",
            SectionId::Industries => "DIAGNOSTICS",
            SectionId::Contact => "PARTNER",
        }
    }
}

// --- Hero ---

pub const HERO_BADGE: &str = "ENTERPRISE INTELLIGENCE";
pub const HERO_TITLE: &str = "ZILLIO";
pub const HERO_TAGLINE: &str = "Transmuting Chaos into Consciousness";
pub const HERO_LEDE: &str = "We operate at the intersection of digital archaeology and \
futuristic architecture, refining legacy foundations into a singular, structured \
intelligent core.";
pub const HERO_CTA: &str = "EXPLORE ARCHITECTURE";

// --- Narrative phases ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtKind {
    Network,
    CapitalMap,
    Growth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Light,
    Dim,
    Dark,
}

pub struct Phase {
    pub id: SectionId,
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraphs: [&'static str; 2],
    pub art: ArtKind,
    pub art_on_left: bool,
    pub band: Band,
    pub show_rule: bool,
}

pub static PHASES: [Phase; 3] = [
    Phase {
        id: SectionId::Awakening,
        eyebrow: "PHASE I",
        title: "The Architectural Awakening",
        subtitle: "Accessing Legacy Data to Form the Intelligent Core",
        paragraphs: [
            "Your legacy infrastructure isn't dead; it's dormant. Zillio acts as the \
             architect that accesses these forgotten foundations—the messy, unstructured \
             data—and refines them.",
            "We don't just clean data; we transmute chaos into a singular, structured, \
             intelligent consciousness for the enterprise. It is digital archaeology \
             meeting futuristic architecture.",
        ],
        art: ArtKind::Network,
        art_on_left: true,
        band: Band::Light,
        show_rule: true,
    },
    Phase {
        id: SectionId::Audit,
        eyebrow: "PHASE II",
        title: "Capital Cartography",
        subtitle: "Mapping Hidden Revenue Streams",
        paragraphs: [
            "Like an explorer mapping a new continent, Zillio visualizes every channel \
             of your conglomerate. We don't just find inefficiencies; we discover \
             dormant capital.",
            "Every node on this map represents a potential profit center. We identify \
             the friction points—the \"blockades\" stopping your flow—and illuminate the \
             trade routes that will maximize deployment. It is a precise topography of \
             your financial future.",
        ],
        art: ArtKind::CapitalMap,
        art_on_left: false,
        band: Band::Dim,
        show_rule: false,
    },
    Phase {
        id: SectionId::Amplification,
        eyebrow: "PHASE III",
        title: "The Amplification Event",
        subtitle: "Profit Maximization • The 138x Concept",
        paragraphs: [
            "This is the resulting physics of the Zillio architecture. When data is \
             unified and gaps are closed, revenue streams don't just add up; they \
             amplify.",
            "This visual represents the immense, steady gravitational pull of the \
             Zillio OS, focusing fragmented income into a single, high-density beam of \
             realized value.",
        ],
        art: ArtKind::Growth,
        art_on_left: true,
        band: Band::Dark,
        show_rule: false,
    },
];

// --- Sector diagnostics ---

pub const DIAGNOSTICS_EYEBROW: &str = "SECTOR DIAGNOSTICS";
pub const DIAGNOSTICS_TITLE: &str = "Applied Intelligence";
pub const DIAGNOSTICS_INTRO: &str = "\"You possess immense resources—assets, traffic, \
capital—but are locked in linear growth. We hold the key to structural leverage, \
transforming your 2D business into a 3D asset.\"";
pub const DIAGNOSTICS_TRAILER: &str = "VIEW FULL DIAGNOSTIC REPORTS";

pub const SYMPTOM_HEADING: &str = "THE LINEAR LOCK (SYMPTOM)";
pub const CURE_HEADING: &str = "THE ZILLIO KEY (CURE)";
pub const IMPACT_HEADING: &str = "PROJECTED IMPACT";

pub struct DiagnosisCard {
    pub title: &'static str,
    pub sub: &'static str,
    pub symptom: &'static str,
    pub cure: &'static str,
    pub impact: &'static str,
    /// Fade-in stagger, in seconds, once the grid first becomes visible.
    pub delay: f64,
}

pub static DIAGNOSIS_CARDS: [DiagnosisCard; 5] = [
    DiagnosisCard {
        title: "Private Equity",
        sub: "OPERATIONS TEAM",
        symptom: "Acquiring high-potential assets but struggling to integrate \
                  operational efficiency at speed.",
        cure: "Systematized operational overhaul & digital leverage.",
        impact: "Rapid EBITDA Expansion",
        delay: 0.0,
    },
    DiagnosisCard {
        title: "Legacy Conglomerates",
        sub: "FAMILY OFFICES",
        symptom: "Massive resource base and legacy assets locked in static, linear \
                  yield models.",
        cure: "Digital archaeology to structure legacy data into active assets.",
        impact: "2D Business → 3D Asset",
        delay: 0.1,
    },
    DiagnosisCard {
        title: "Corporate Ventures",
        sub: "VENTURE BUILDERS",
        symptom: "High capital burn with chaotic, unpredictable incubation results.",
        cure: "Modular growth architecture & standardized venture scaling.",
        impact: "Repeatable Success Models",
        delay: 0.2,
    },
    DiagnosisCard {
        title: "High-Friction Giants",
        sub: "REGULATED INDUSTRIES",
        symptom: "Dominant cash flow capped by regulatory friction or stigma in 'Grey \
                  Zone' markets.",
        cure: "Automated compliance & reputational architecture.",
        impact: "Institutional Legitimacy",
        delay: 0.3,
    },
    DiagnosisCard {
        title: "Scaling AI Agencies",
        sub: "APP LAYER EXPANSION",
        symptom: "Explosive market demand breaking manual operational seams.",
        cure: "Zillio OS as the central nervous system for autonomous ops.",
        impact: "Non-Linear Output Scaling",
        delay: 0.4,
    },
];

// --- Call to action ---

pub const CTA_TITLE: &str = "Ready to Transmute Chaos?";
pub const CTA_BUTTON: &str = "PARTNER WITH US";
pub const PARTNER_URL: &str = "https://zillio.example/partner";

// --- Footer ---

pub const FOOTER_BRAND: &str = "AMPLIFICATION IND.";
pub const FOOTER_SUBLINE: &str = "ZILLIO OS • ENTERPRISE INTELLIGENCE";
pub const FOOTER_COPYRIGHT: &str = "AMPLIFICATION INDUSTRIES. ALL SYSTEMS OPERATIONAL.";

pub struct FooterLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub static FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink {
        label: "LEGAL",
        url: "https://zillio.example/legal",
    },
    FooterLink {
        label: "PRIVACY",
        url: "https://zillio.example/privacy",
    },
    FooterLink {
        label: "CONTACT",
        url: "https://zillio.example/contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_sections_are_distinct() {
        for (i, a) in SectionId::NAV.iter().enumerate() {
            for b in &SectionId::NAV[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_phases_cover_first_three_sections() {
        assert_eq!(PHASES[0].id, SectionId::Awakening);
        assert_eq!(PHASES[1].id, SectionId::Audit);
        assert_eq!(PHASES[2].id, SectionId::Amplification);
    }

    #[test]
    fn test_card_delays_are_staggered() {
        for pair in DIAGNOSIS_CARDS.windows(2) {
            assert!(pair[0].delay < pair[1].delay);
        }
    }
}
