/// Relation ids and the rating stay raw; they are checked while the command
/// is handled so that every problem is reported together.
#[derive(Clone, Debug)]
pub struct CreateVideoCommand {
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: String,
    pub is_opened: bool,
    pub categories_id: Vec<String>,
    pub genres_id: Vec<String>,
    pub cast_members_id: Vec<String>,
}
