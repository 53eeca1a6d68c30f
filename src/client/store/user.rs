use crate::model::user::UserDto;

/// Current-user lookup shared with everything rendered inside a [`UserGate`](crate::client::components::user_gate::UserGate).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Whether the lookup has finished, successfully or not
    pub fetched: bool,
}

impl UserState {
    /// Signed in with both email and organization confirmation
    pub fn is_confirmed(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_confirmed())
    }
}
