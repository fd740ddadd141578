//! Profile service — merges the employee and customer tables into one
//! `User` view and routes edits back to the owning table.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{split_location, DomainResult, RepositoryProvider, User, UserType};

/// What `update_profile` did. Only `Saved` wrote anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Saved,
    /// No row in the target table has the given id
    TargetMissing,
    /// `user_type` was neither "Employee" nor "Customer"
    InvalidUserType,
}

impl UpdateOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Resolve a profile by exact email or username, employees first.
    ///
    /// `Ok(None)` when neither table matches.
    pub async fn get_profile(&self, email_or_username: &str) -> DomainResult<Option<User>> {
        if let Some(employee) = self
            .repos
            .employees()
            .find_by_email_or_username(email_or_username)
            .await?
        {
            return Ok(Some(User::from(employee)));
        }

        let customer = self
            .repos
            .customers()
            .find_by_email_or_username(email_or_username)
            .await?;

        Ok(customer.map(User::from))
    }

    /// Load the profile of a known account. Used for the signed-in user, whose
    /// table and id come from the session.
    pub async fn get_profile_by_id(
        &self,
        user_type: UserType,
        id: i32,
    ) -> DomainResult<Option<User>> {
        match user_type {
            UserType::Employee => Ok(self.repos.employees().find_by_id(id).await?.map(User::from)),
            UserType::Customer => Ok(self.repos.customers().find_by_id(id).await?.map(User::from)),
        }
    }

    /// Copy the editable fields of `profile` back to its backing row.
    ///
    /// A missing row or an unknown `user_type` is logged and skipped; only
    /// storage failures are returned as errors. Username and email are never
    /// changed here.
    pub async fn update_profile(&self, profile: &User) -> DomainResult<UpdateOutcome> {
        info!(
            id = profile.id,
            user_type = %profile.user_type,
            name = %profile.first_name,
            "Saving profile"
        );

        match profile.kind() {
            Some(UserType::Employee) => self.update_employee(profile).await,
            Some(UserType::Customer) => self.update_customer(profile).await,
            None => {
                error!(user_type = %profile.user_type, "Invalid user type, profile not saved");
                Ok(UpdateOutcome::InvalidUserType)
            }
        }
    }

    async fn update_employee(&self, profile: &User) -> DomainResult<UpdateOutcome> {
        let repo = self.repos.employees();
        let Some(mut employee) = repo.find_by_id(profile.id).await? else {
            error!(id = profile.id, "Employee not found, profile not saved");
            return Ok(UpdateOutcome::TargetMissing);
        };

        employee.first_name = profile.first_name.clone();
        employee.last_name = profile.last_name.clone();
        employee.phone_number = profile.phone.clone();

        if let Some((city, state)) = split_location(&profile.location) {
            info!(%city, %state, "Updated employee location");
            employee.city = city;
            employee.state = state;
        }

        if !repo.save_profile(&employee).await? {
            error!(id = profile.id, "Employee disappeared before save");
            return Ok(UpdateOutcome::TargetMissing);
        }

        info!(id = profile.id, "Employee profile saved");
        Ok(UpdateOutcome::Saved)
    }

    async fn update_customer(&self, profile: &User) -> DomainResult<UpdateOutcome> {
        let repo = self.repos.customers();
        let Some(mut customer) = repo.find_by_id(profile.id).await? else {
            error!(id = profile.id, "Customer not found, profile not saved");
            return Ok(UpdateOutcome::TargetMissing);
        };

        customer.first_name = profile.first_name.clone();
        customer.last_name = profile.last_name.clone();
        customer.phone_number = profile.phone.clone();

        if !repo.save_profile(&customer).await? {
            error!(id = profile.id, "Customer disappeared before save");
            return Ok(UpdateOutcome::TargetMissing);
        }

        info!(id = profile.id, "Customer profile saved");
        Ok(UpdateOutcome::Saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    use crate::application::testing::{customer, employee, InMemoryRepositories};
    use crate::domain::{CUSTOMER_JOB_TITLE, CUSTOMER_LOCATION};

    fn setup() -> (Arc<InMemoryRepositories>, UserService) {
        let repos = Arc::new(InMemoryRepositories::new());
        repos.employees.insert(employee(1, "ana", "ana@spa.test"));
        repos.customers.insert(customer(7, "bea", "bea@mail.test"));
        let service = UserService::new(repos.clone());
        (repos, service)
    }

    fn edit(mut user: User, f: impl FnOnce(&mut User)) -> User {
        f(&mut user);
        user
    }

    #[tokio::test]
    async fn resolves_employee_by_email_and_username() {
        let (_, service) = setup();
        for key in ["ana", "ana@spa.test"] {
            let user = service.get_profile(key).await.unwrap().unwrap();
            assert_eq!(user.user_type, "Employee");
            assert_eq!(user.location, "Austin, TX");
            assert_eq!(user.job_title, "Massage Therapist");
            assert_eq!(user.id, 1);
        }
    }

    #[tokio::test]
    async fn resolves_customer_when_no_employee_matches() {
        let (_, service) = setup();
        let user = service.get_profile("bea@mail.test").await.unwrap().unwrap();
        assert_eq!(user.user_type, "Customer");
        assert_eq!(user.location, CUSTOMER_LOCATION);
        assert_eq!(user.job_title, CUSTOMER_JOB_TITLE);
        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn employee_wins_when_both_tables_match() {
        let (repos, service) = setup();
        repos.customers.insert(customer(8, "ana", "other@mail.test"));
        let user = service.get_profile("ana").await.unwrap().unwrap();
        assert_eq!(user.user_type, "Employee");
    }

    #[tokio::test]
    async fn unknown_key_is_none() {
        let (_, service) = setup();
        assert!(service.get_profile("nobody").await.unwrap().is_none());
        assert!(service.get_profile("ANA").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn employee_location_is_split_into_city_and_state() {
        let (repos, service) = setup();
        let user = service.get_profile("ana").await.unwrap().unwrap();
        let user = edit(user, |u| {
            u.first_name = "Ana Maria".into();
            u.phone = "555-0111".into();
            u.location = "Dallas,  TX ".into();
        });

        let outcome = service.update_profile(&user).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::Saved);

        let row = repos.employee(1).unwrap();
        assert_eq!(row.first_name, "Ana Maria");
        assert_eq!(row.phone_number, "555-0111");
        assert_eq!(row.city, "Dallas");
        assert_eq!(row.state, "TX");
    }

    #[tokio::test]
    async fn location_without_comma_keeps_city_and_state() {
        let (repos, service) = setup();
        let user = service.get_profile("ana").await.unwrap().unwrap();
        let user = edit(user, |u| u.location = "Houston".into());

        assert!(service.update_profile(&user).await.unwrap().is_saved());

        let row = repos.employee(1).unwrap();
        assert_eq!(row.city, "Austin");
        assert_eq!(row.state, "TX");
    }

    #[tokio::test]
    async fn extra_location_parts_are_dropped() {
        let (repos, service) = setup();
        let user = service.get_profile("ana").await.unwrap().unwrap();
        let user = edit(user, |u| u.location = "Portland, OR, USA".into());

        service.update_profile(&user).await.unwrap();

        let row = repos.employee(1).unwrap();
        assert_eq!(row.city, "Portland");
        assert_eq!(row.state, "OR");
    }

    #[tokio::test]
    async fn username_and_email_are_not_updated() {
        let (repos, service) = setup();
        let user = service.get_profile("bea").await.unwrap().unwrap();
        let user = edit(user, |u| {
            u.username = "beatrice".into();
            u.email = "new@mail.test".into();
            u.last_name = "Park".into();
        });

        service.update_profile(&user).await.unwrap();

        let row = repos.customer(7).unwrap();
        assert_eq!(row.username, "bea");
        assert_eq!(row.email, "bea@mail.test");
        assert_eq!(row.last_name, "Park");
    }

    #[tokio::test]
    async fn profile_by_id_reads_only_the_given_table() {
        let (repos, service) = setup();
        // Same username as employee 1
        repos.customers.insert(customer(8, "ana", "ana.k@mail.test"));

        let user = service
            .get_profile_by_id(UserType::Customer, 8)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.user_type, "Customer");
        assert_eq!(user.email, "ana.k@mail.test");

        let user = service
            .get_profile_by_id(UserType::Employee, 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.user_type, "Employee");

        assert!(service
            .get_profile_by_id(UserType::Employee, 7)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn unknown_user_type_writes_nothing() {
        let (repos, service) = setup();
        let user = service.get_profile("ana").await.unwrap().unwrap();
        let user = edit(user, |u| {
            u.user_type = "Guest".into();
            u.first_name = "Changed".into();
        });

        let outcome = service.update_profile(&user).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::InvalidUserType);
        assert_eq!(repos.writes(), 0);
        assert_eq!(repos.employee(1).unwrap().first_name, "Ana");
        assert!(logs_contain("ERROR"));
        assert!(logs_contain("Invalid user type, profile not saved"));
    }

    #[tokio::test]
    #[traced_test]
    async fn missing_target_writes_nothing() {
        let (repos, service) = setup();
        let user = service.get_profile("bea").await.unwrap().unwrap();

        // Customer 7 exists, but there is no employee 7.
        let as_employee = edit(user.clone(), |u| u.user_type = "Employee".into());
        assert_eq!(
            service.update_profile(&as_employee).await.unwrap(),
            UpdateOutcome::TargetMissing
        );

        let unknown_id = edit(user, |u| u.id = 99);
        assert_eq!(
            service.update_profile(&unknown_id).await.unwrap(),
            UpdateOutcome::TargetMissing
        );

        assert_eq!(repos.writes(), 0);
        assert!(logs_contain("Employee not found, profile not saved"));
        assert!(logs_contain("Customer not found, profile not saved"));
    }
}
