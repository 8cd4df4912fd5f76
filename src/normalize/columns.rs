// src/normalize/columns.rs
//! Which cell is which. Session tables differ in shape, so each role is found
//! by an ordered matcher: a header predicate first, then a positional guess.

use crate::core::sanitize::is_year;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRole {
    /// Name and club, separated by a `<br>`.
    Athlete,
    BirthYear,
}

#[derive(Clone, Copy, Debug)]
pub enum Fallback {
    /// Use this index when the row is at least that wide.
    Index(usize),
    /// Use this index only if its text is a four-digit year.
    YearAt(usize),
}

#[derive(Clone, Copy, Debug)]
pub struct RoleMatcher {
    pub role: ColumnRole,
    /// Lowercased header containing any of these claims the role.
    pub keywords: &'static [&'static str],
    pub fallback: Fallback,
}

/// Evaluated top to bottom; a column claimed by an earlier role is not reused.
pub const ROLE_MATCHERS: &[RoleMatcher] = &[
    RoleMatcher { role: ColumnRole::Athlete, keywords: &["name", "gymnast"], fallback: Fallback::Index(2) },
    RoleMatcher { role: ColumnRole::BirthYear, keywords: &["born", "yob"], fallback: Fallback::YearAt(3) },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub athlete: Option<usize>,
    pub birth_year: Option<usize>,
}

impl ColumnRoles {
    pub fn is_claimed(&self, idx: usize) -> bool {
        self.athlete == Some(idx) || self.birth_year == Some(idx)
    }

    fn set(&mut self, role: ColumnRole, idx: usize) {
        match role {
            ColumnRole::Athlete => self.athlete = Some(idx),
            ColumnRole::BirthYear => self.birth_year = Some(idx),
        }
    }
}

/// Assign roles for one row. `cells` is the stripped text of each cell.
/// A header match only counts when the row actually has that cell.
pub fn assign(headers: &[String], cells: &[String]) -> ColumnRoles {
    let mut roles = ColumnRoles::default();

    for m in ROLE_MATCHERS {
        let found = by_header(m, headers, cells.len(), &roles).or_else(|| match m.fallback {
            Fallback::Index(i) => (cells.len() > i && !roles.is_claimed(i)).then_some(i),
            Fallback::YearAt(i) => cells
                .get(i)
                .filter(|t| is_year(t) && !roles.is_claimed(i))
                .map(|_| i),
        });
        if let Some(i) = found {
            roles.set(m.role, i);
        }
    }
    roles
}

/// Roles decided by the header row alone (no positional guesses).
pub fn header_roles(headers: &[String]) -> ColumnRoles {
    let mut roles = ColumnRoles::default();
    for m in ROLE_MATCHERS {
        if let Some(i) = by_header(m, headers, headers.len(), &roles) {
            roles.set(m.role, i);
        }
    }
    roles
}

fn by_header(m: &RoleMatcher, headers: &[String], width: usize, roles: &ColumnRoles) -> Option<usize> {
    headers.iter().take(width).enumerate().find_map(|(i, h)| {
        let h = h.to_lowercase();
        (!roles.is_claimed(i) && m.keywords.iter().any(|k| h.contains(k))).then_some(i)
    })
}
