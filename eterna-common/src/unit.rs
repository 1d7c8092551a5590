/// One marketed residence in the availability listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Display label, e.g. "Floor 40"
    pub floor: &'static str,
    /// Display price, already formatted
    pub price: &'static str,
    /// Display area in square feet, already formatted
    pub sqft: &'static str,
    pub bedrooms: u8,
    pub available: bool,
    pub is_penthouse: bool,
    pub is_high_floor: bool,
}

/// The listing shown on the page, in display order
pub const UNITS: &[Unit] = &[
    Unit {
        floor: "Penthouse",
        price: "$2,500,000",
        sqft: "3,500",
        bedrooms: 4,
        available: true,
        is_penthouse: true,
        is_high_floor: true,
    },
    Unit {
        floor: "Floor 40",
        price: "$1,800,000",
        sqft: "2,800",
        bedrooms: 3,
        available: true,
        is_penthouse: false,
        is_high_floor: true,
    },
    Unit {
        floor: "Floor 39",
        price: "$1,700,000",
        sqft: "2,600",
        bedrooms: 3,
        available: false,
        is_penthouse: false,
        is_high_floor: true,
    },
    Unit {
        floor: "Floor 38",
        price: "$1,600,000",
        sqft: "2,400",
        bedrooms: 2,
        available: true,
        is_penthouse: false,
        is_high_floor: true,
    },
];

impl Unit {
    /// Status text shown under the floor label
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Reserved"
        }
    }
}

/// Which icon a partner card carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerKind {
    Architecture,
    Development,
    Renders,
    Branding,
}

/// A firm credited in the "Our Partners" grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub kind: PartnerKind,
    pub name: &'static str,
    pub description: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner {
        kind: PartnerKind::Architecture,
        name: "Design Architects",
        description: "NoName Architecture",
    },
    Partner {
        kind: PartnerKind::Development,
        name: "Developers",
        description: "Mara Properties",
    },
    Partner {
        kind: PartnerKind::Renders,
        name: "CGI Images",
        description: "JVA Renders",
    },
    Partner {
        kind: PartnerKind::Branding,
        name: "Branding & Web Design",
        description: "Black Navy Real Estate",
    },
];
