use serde::Serialize;
use std::cmp::Ordering;

/// Guard classification. Regulars are listed before extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Regular, // R
    Extra,   // E
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Regular => "R",
            Role::Extra => "E",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Extra => "extra",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "R" => Some(Role::Regular),
            "E" => Some(Role::Extra),
            _ => None,
        }
    }

    /// Helper: accept codes or full names from the CLI, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "R" | "REGULAR" => Some(Role::Regular),
            "E" | "EXTRA" => Some(Role::Extra),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: i64,
    pub name: String,               // ⇔ personnel.name (UNIQUE)
    pub role: Role,                 // ⇔ personnel.role ('R' | 'E')
    pub security_responsible: bool, // ⇔ personnel.security_responsible (0/1)
}

impl Person {
    pub fn is_regular(&self) -> bool {
        matches!(self.role, Role::Regular)
    }

    /// Roster order: regulars first, then case-insensitive alphabetical.
    pub fn roster_order(a: &Person, b: &Person) -> Ordering {
        match (a.is_regular(), b.is_regular()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
        }
    }
}
