#[derive(Clone, Debug)]
pub struct CreateCastMemberCommand {
    name: String,
    cast_member_type: i32,
}

impl CreateCastMemberCommand {
    pub fn new(name: String, cast_member_type: i32) -> Self {
        Self {
            name,
            cast_member_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw type code; checked when the command is handled.
    pub fn cast_member_type(&self) -> i32 {
        self.cast_member_type
    }
}
