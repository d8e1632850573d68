//! CRUD stub templates

use minijinja::{Environment, context};

const CREATE_TEMPLATE: &str = "\
func Create{{ model }}(db *gorm.DB, m *{{ model }}) error {
\treturn db.Create(m).Error
}";

const GET_TEMPLATE: &str = "\
func Get{{ model }}(db *gorm.DB, id interface{}) (*{{ model }}, error) {
\tvar m {{ model }}
\tif err := db.First(&m, id).Error; err != nil {
\t\treturn nil, err
\t}
\treturn &m, nil
}";

const LIST_TEMPLATE: &str = "\
func List{{ model }}(db *gorm.DB, offset, limit int) ([]*{{ model }}, error) {
\tvar list []*{{ model }}
\tif err := db.Offset(offset).Limit(limit).Find(&list).Error; err != nil {
\t\treturn nil, err
\t}
\treturn list, nil
}";

const UPDATE_TEMPLATE: &str = "\
func Update{{ model }}(db *gorm.DB, m *{{ model }}) error {
\treturn db.Save(m).Error
}";

const DELETE_TEMPLATE: &str = "\
func Delete{{ model }}(db *gorm.DB, id interface{}) error {
\treturn db.Delete(&{{ model }}{}, id).Error
}";

/// The generated CRUD operations, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOperation {
    Create,
    Get,
    List,
    Update,
    Delete,
}

impl CrudOperation {
    /// All operations in the order they are emitted
    pub const ALL: [CrudOperation; 5] = [
        CrudOperation::Create,
        CrudOperation::Get,
        CrudOperation::List,
        CrudOperation::Update,
        CrudOperation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrudOperation::Create => "create",
            CrudOperation::Get => "get",
            CrudOperation::List => "list",
            CrudOperation::Update => "update",
            CrudOperation::Delete => "delete",
        }
    }

    /// Go function name prefix, e.g. `Create` in `CreateUser`
    pub fn func_prefix(&self) -> &'static str {
        match self {
            CrudOperation::Create => "Create",
            CrudOperation::Get => "Get",
            CrudOperation::List => "List",
            CrudOperation::Update => "Update",
            CrudOperation::Delete => "Delete",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            CrudOperation::Create => CREATE_TEMPLATE,
            CrudOperation::Get => GET_TEMPLATE,
            CrudOperation::List => LIST_TEMPLATE,
            CrudOperation::Update => UPDATE_TEMPLATE,
            CrudOperation::Delete => DELETE_TEMPLATE,
        }
    }
}

/// Renders CRUD stubs for a model type. The only template variable is
/// `model`, the Go type name.
pub struct CrudTemplates {
    env: Environment<'static>,
}

impl CrudTemplates {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Renders one operation for the given model type
    pub fn render(&self, operation: CrudOperation, model: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.template_from_str(operation.template())?;
        tmpl.render(context! { model => model })
    }

    /// Renders every operation in emission order
    pub fn render_all(&self, model: &str) -> Result<Vec<String>, minijinja::Error> {
        CrudOperation::ALL
            .iter()
            .map(|operation| self.render(*operation, model))
            .collect()
    }
}

impl Default for CrudTemplates {
    fn default() -> Self {
        Self::new()
    }
}
