use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_person_cascade, find_person_by_name, insert_person, update_person};
use crate::errors::{AppError, AppResult};
use crate::models::person::{Person, Role};

pub struct PersonLogic;

impl PersonLogic {
    pub fn add(
        pool: &mut DbPool,
        name: &str,
        role: Role,
        security_responsible: bool,
    ) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty.".into()));
        }
        if find_person_by_name(&pool.conn, name)?.is_some() {
            return Err(AppError::DuplicatePerson(name.to_string()));
        }

        let id = insert_person(&pool.conn, name, role, security_responsible)?;
        audit(
            &pool.conn,
            "add",
            &format!("person {}", id),
            &format!("{} ({})", name, role.label()),
        );
        Ok(id)
    }

    /// Change classification flags; unspecified values are kept.
    pub fn edit(
        pool: &mut DbPool,
        person: &Person,
        role: Option<Role>,
        security_responsible: Option<bool>,
    ) -> AppResult<()> {
        let role = role.unwrap_or(person.role);
        let sec = security_responsible.unwrap_or(person.security_responsible);

        update_person(&pool.conn, person.id, role, sec)?;
        audit(
            &pool.conn,
            "edit",
            &format!("person {}", person.id),
            &format!("role={} security_responsible={}", role.label(), sec),
        );
        Ok(())
    }

    /// Delete assignments and work hours first, then the person.
    pub fn delete(pool: &mut DbPool, person: &Person) -> AppResult<()> {
        pool.with_tx(|conn| {
            let removed = delete_person_cascade(conn, person.id)?;
            if removed == 0 {
                return Err(AppError::PersonNotFound(person.name.clone()));
            }
            audit(conn, "del", &format!("person {}", person.id), &person.name);
            Ok(())
        })
    }
}
