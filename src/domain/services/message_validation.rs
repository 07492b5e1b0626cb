//! Ordering rules a conversation must satisfy before it is sent to the service.
//!
//! Rules are checked in this order and the first violation wins:
//!
//! 1. every role is one of `system`, `assistant`, `user`, `tool`
//! 2. a non-empty conversation ends on `user` or `tool`
//! 3. at most one `system` message
//! 4. no two adjacent messages share a role
//!
//! The adjacency rule is purely positional: a `system` message is not required
//! to come first, and it counts like any other role when compared with its
//! neighbours. An empty conversation satisfies every rule.

use crate::domain::{Message, Role, ValidationError};

pub fn validate_messages(messages: &[Message]) -> Result<(), ValidationError> {
    check_known_roles(messages)?;
    check_last_role(messages)?;
    check_single_system(messages)?;
    check_no_repeated_roles(messages)
}

pub fn check_known_roles(messages: &[Message]) -> Result<(), ValidationError> {
    match messages.iter().enumerate().find(|(_, m)| !m.role.is_known()) {
        Some((index, message)) => Err(ValidationError::InvalidRole {
            index,
            role: message.role.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

pub fn check_last_role(messages: &[Message]) -> Result<(), ValidationError> {
    match messages.last() {
        Some(last) if last.role != Role::User && last.role != Role::Tool => {
            Err(ValidationError::InvalidLastRole {
                role: last.role.clone(),
            })
        }
        _ => Ok(()),
    }
}

pub fn check_single_system(messages: &[Message]) -> Result<(), ValidationError> {
    let count = messages.iter().filter(|m| m.role == Role::System).count();
    if count > 1 {
        return Err(ValidationError::MultipleSystemMessages { count });
    }
    Ok(())
}

pub fn check_no_repeated_roles(messages: &[Message]) -> Result<(), ValidationError> {
    for (i, pair) in messages.windows(2).enumerate() {
        if pair[0].role == pair[1].role {
            return Err(ValidationError::RepeatedRole {
                index: i + 1,
                role: pair[1].role.clone(),
            });
        }
    }
    Ok(())
}
