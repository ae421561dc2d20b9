/// Category ids stay raw here; they are parsed and checked for existence
/// while the command is handled.
#[derive(Clone, Debug)]
pub struct CreateGenreCommand {
    name: String,
    categories_id: Vec<String>,
    is_active: Option<bool>,
}

impl CreateGenreCommand {
    pub fn new(name: String, categories_id: Vec<String>, is_active: Option<bool>) -> Self {
        Self {
            name,
            categories_id,
            is_active,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories_id(&self) -> &[String] {
        &self.categories_id
    }

    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }
}
