#[derive(Clone, Debug)]
pub struct CreateCategoryCommand {
    name: String,
    description: Option<String>,
    is_active: Option<bool>,
}

impl CreateCategoryCommand {
    pub fn new(name: String, description: Option<String>, is_active: Option<bool>) -> Self {
        Self {
            name,
            description,
            is_active,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }
}
