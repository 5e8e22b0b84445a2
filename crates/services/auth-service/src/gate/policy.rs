//! Role-based access policy, expressed as data.

use std::collections::HashMap;

use domain::{UserId, UserRole};

use super::Principal;

/// Protected operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read one user's full profile
    ReadUser,
    /// List users, paginated
    ListUsers,
    /// Update the caller's own profile
    UpdateOwnProfile,
    /// Delete a user
    DeleteUser,
}

/// Requirement attached to one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Roles allowed to perform the operation
    pub roles: Vec<UserRole>,
    /// When set, the target must be the caller's own id
    pub own_only: bool,
}

impl Rule {
    pub fn roles(roles: &[UserRole]) -> Self {
        Self {
            roles: roles.to_vec(),
            own_only: false,
        }
    }

    pub fn own_only(roles: &[UserRole]) -> Self {
        Self {
            roles: roles.to_vec(),
            own_only: true,
        }
    }

    fn permits(&self, principal: &Principal, target: Option<UserId>) -> bool {
        if !self.roles.contains(&principal.role) {
            return false;
        }
        !self.own_only || target.map_or(true, |id| id == principal.user_id)
    }
}

/// Operation → rule table. Operations without a rule are denied.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: HashMap<Operation, Rule>,
}

impl AccessPolicy {
    /// An empty policy that denies everything
    pub fn deny_all() -> Self {
        Self::default()
    }

    /// The service's standard policy.
    pub fn standard() -> Self {
        use UserRole::{Admin, Employee};

        Self::deny_all()
            .with_rule(Operation::ReadUser, Rule::roles(&[Employee, Admin]))
            .with_rule(Operation::ListUsers, Rule::roles(&[Admin]))
            .with_rule(Operation::UpdateOwnProfile, Rule::own_only(&[Employee, Admin]))
            .with_rule(Operation::DeleteUser, Rule::roles(&[Admin]))
    }

    pub fn with_rule(mut self, operation: Operation, rule: Rule) -> Self {
        self.rules.insert(operation, rule);
        self
    }

    pub fn rule(&self, operation: Operation) -> Option<&Rule> {
        self.rules.get(&operation)
    }

    /// Decide whether `principal` may perform `operation` on `target`.
    pub fn permits(&self, principal: &Principal, operation: Operation, target: Option<UserId>) -> bool {
        self.rule(operation)
            .map_or(false, |rule| rule.permits(principal, target))
    }
}
