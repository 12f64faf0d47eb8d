//! Fixed clinical procedure categories

/// One of the 14 fixed procedure categories
///
/// Declaration order is the canonical column order and matches the rule
/// precedence in the classifier; `Other` is the catch-all and always last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    IncisionDrainage,
    Excision,
    NailExtraction,
    OffPermCatheter,
    LymphnodeBiopsy,
    Debridement,
    Ec,
    Frenectomy,
    Morpheus,
    Cooltech,
    Laser,
    EyelidCorrection,
    Facelift,
    Other,
}

impl Category {
    /// All categories in canonical column order
    pub const ALL: [Category; 14] = [
        Category::IncisionDrainage,
        Category::Excision,
        Category::NailExtraction,
        Category::OffPermCatheter,
        Category::LymphnodeBiopsy,
        Category::Debridement,
        Category::Ec,
        Category::Frenectomy,
        Category::Morpheus,
        Category::Cooltech,
        Category::Laser,
        Category::EyelidCorrection,
        Category::Facelift,
        Category::Other,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::IncisionDrainage => "I+D",
            Category::Excision => "Excision",
            Category::NailExtraction => "Nail extraction",
            Category::OffPermCatheter => "Off perm/catheter",
            Category::LymphnodeBiopsy => "Lymphnode biopsy",
            Category::Debridement => "Debridement",
            Category::Ec => "EC",
            Category::Frenectomy => "Frenectomy",
            Category::Morpheus => "Morpheus",
            Category::Cooltech => "Cooltech",
            Category::Laser => "Laser",
            Category::EyelidCorrection => "Eyelid correction",
            Category::Facelift => "Facelift",
            Category::Other => "Other",
        }
    }

    /// Position in the canonical column order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Check for the catch-all category
    pub fn is_other(&self) -> bool {
        matches!(self, Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
