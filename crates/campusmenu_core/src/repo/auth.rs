//! Credential check and session lifecycle.
//!
//! Not a full auth system: one fixed admin credential pair, verbatim
//! password comparison against student records, and two shadow documents
//! (`current_user`, `current_student`) for fast session restore.
//!
//! # Invariants
//! - Session states: logged out, admin, student. A role change always goes
//!   through a fresh `login`.
//! - `logout` removes both shadow documents; nothing else is touched.

use log::info;

use super::{documents, ChangeEvent, RepoResult, Repository};
use crate::model::account::{Student, User, UserRole};
use crate::model::menu::Allergen;
use crate::model::new_id;

/// Built-in administrator credentials, matched before any student lookup.
const ADMIN_EMAIL: &str = "admin@campus.com";
const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_NAME: &str = "Admin";

impl Repository {
    /// Attempts a login; `Ok(None)` means the credentials matched nothing.
    ///
    /// Admin first, then the first student registered under the email with a
    /// verbatim password match. A successful login persists the session
    /// shadow documents.
    pub fn login(&mut self, email: &str, password: &str) -> RepoResult<Option<User>> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            let user = User {
                id: new_id(),
                full_name: ADMIN_NAME.to_string(),
                email: email.to_string(),
                role: UserRole::Admin,
            };
            self.current_user = Some(user.clone());
            self.current_student = None;
            info!("event=login module=repo status=ok role=admin");
            self.store.save(documents::CURRENT_USER, &user)?;
            // An admin session has no student shadow; drop any stale one.
            self.store.remove(documents::CURRENT_STUDENT)?;
            self.emit(ChangeEvent::Session);
            return Ok(Some(user));
        }

        let Some(student) = self
            .find_student_by_email(email)
            .filter(|s| s.password == password)
            .cloned()
        else {
            info!("event=login module=repo status=rejected");
            return Ok(None);
        };

        let user = User::from_student(&student);
        self.current_user = Some(user.clone());
        self.current_student = Some(student.clone());
        info!("event=login module=repo status=ok role=student id={}", user.id);
        self.store.save(documents::CURRENT_USER, &user)?;
        self.store.save(documents::CURRENT_STUDENT, &student)?;
        self.emit(ChangeEvent::Session);
        Ok(Some(user))
    }

    /// Registers a student and immediately logs in with its credentials.
    ///
    /// `Ok(None)` is possible only when the email was already registered
    /// under a different password: the login lookup finds the earlier record
    /// first and rejects the match.
    pub fn register(&mut self, student: Student) -> RepoResult<Option<User>> {
        let email = student.email.clone();
        let password = student.password.clone();
        self.add_student(student)?;
        self.login(&email, &password)
    }

    /// Clears the session and removes both shadow documents.
    pub fn logout(&mut self) -> RepoResult<()> {
        self.current_user = None;
        self.current_student = None;
        info!("event=logout module=repo status=ok");
        let removed = self
            .store
            .remove(documents::CURRENT_USER)
            .and_then(|()| self.store.remove(documents::CURRENT_STUDENT));
        self.emit(ChangeEvent::Session);
        removed.map_err(Into::into)
    }

    /// Rewrites the current student's allergen list, propagating into the
    /// students collection and the current-student shadow document.
    ///
    /// A no-op when no student session is active.
    pub fn update_allergens(&mut self, allergens: Vec<Allergen>) -> RepoResult<()> {
        let Some(student) = self.current_student.as_mut() else {
            return Ok(());
        };
        student.allergens = allergens;
        let snapshot = student.clone();

        if let Some(index) = self.students.iter().position(|s| s.id == snapshot.id) {
            self.students[index] = snapshot.clone();
        }
        let saved = self.save_students().and_then(|()| {
            self.store
                .save(documents::CURRENT_STUDENT, &snapshot)
                .map_err(Into::into)
        });
        self.emit(ChangeEvent::Students);
        self.emit(ChangeEvent::Session);
        saved
    }
}
