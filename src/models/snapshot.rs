use super::matches::Match;
use super::person::Person;
use super::security_duty::SecurityDuty;
use super::work_hour::WorkHourEntry;

/// Full in-memory copy of the store. Every command reads a fresh one and
/// reloads it after writing; it is never patched in place.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Roster order (regulars first, then alphabetical).
    pub personnel: Vec<Person>,
    /// Ascending by date, each with its assignments.
    pub matches: Vec<Match>,
    /// Descending by work date.
    pub work_hours: Vec<WorkHourEntry>,
    /// Descending by date.
    pub security_duties: Vec<SecurityDuty>,
}

impl Snapshot {
    pub fn person(&self, id: i64) -> Option<&Person> {
        self.personnel.iter().find(|p| p.id == id)
    }

    /// Resolve a CLI reference: numeric id first, then exact name,
    /// then case-insensitive name.
    pub fn find_person(&self, key: &str) -> Option<&Person> {
        let key = key.trim();
        if let Ok(id) = key.parse::<i64>()
            && let Some(p) = self.person(id)
        {
            return Some(p);
        }
        self.personnel
            .iter()
            .find(|p| p.name == key)
            .or_else(|| {
                self.personnel
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(key))
            })
    }

    pub fn match_by_id(&self, id: i64) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn regulars(&self) -> impl Iterator<Item = &Person> {
        self.personnel.iter().filter(|p| p.is_regular())
    }

    pub fn extras(&self) -> impl Iterator<Item = &Person> {
        self.personnel.iter().filter(|p| !p.is_regular())
    }

    pub fn entry_for(&self, match_id: i64, personnel_id: i64) -> Option<&WorkHourEntry> {
        self.work_hours
            .iter()
            .find(|wh| wh.is_for(match_id, personnel_id))
    }

    pub fn entries_for_person(&self, personnel_id: i64) -> impl Iterator<Item = &WorkHourEntry> {
        self.work_hours
            .iter()
            .filter(move |wh| wh.personnel_id == personnel_id)
    }

    pub fn duties_for_person<'a>(
        &'a self,
        person: &'a Person,
    ) -> impl Iterator<Item = &'a SecurityDuty> {
        self.security_duties
            .iter()
            .filter(move |d| d.belongs_to(person))
    }
}
