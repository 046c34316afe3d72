//! Field lists for CRUD generation (`--fields="title:string,body:text"`).
//!
//! Each renderer maps every [`FieldSpec`] through a fixed type table and
//! joins one block per field with newlines. An empty field list renders a
//! single placeholder comment line so the stub stays syntactically valid.

use crate::domain::naming::label;

/// One `name:type` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }

    fn label(&self) -> String {
        label(&self.name)
    }
}

/// Parse a comma-separated `name:type` list.
///
/// Entries without exactly one `:` are skipped.
pub fn parse_fields(raw: Option<&str>) -> Vec<FieldSpec> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };

    raw.split(',')
        .filter_map(|entry| {
            let parts: Vec<&str> = entry.trim().split(':').collect();
            match parts.as_slice() {
                [name, ty] if !name.trim().is_empty() => {
                    Some(FieldSpec::new(name.trim(), ty.trim()))
                }
                _ => None,
            }
        })
        .collect()
}

// ── Blade views ──────────────────────────────────────────────────────────────

/// How a form input gets its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueBinding<'a> {
    /// `old('title')`
    Create,
    /// `old('title', $post->title)`
    Edit(&'a str),
}

impl ValueBinding<'_> {
    fn render(&self, field: &str) -> String {
        match self {
            Self::Create => format!("{{{{ old('{field}') }}}}"),
            Self::Edit(var) => format!("{{{{ old('{field}', ${var}->{field}) }}}}"),
        }
    }
}

/// Input markup chosen for a Blade form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Textarea,
    Email,
    Checkbox,
}

impl InputKind {
    pub fn for_type(field_type: &str) -> Self {
        match field_type.to_ascii_lowercase().as_str() {
            "string" | "text" | "varchar" => Self::Text,
            "textarea" => Self::Textarea,
            "email" => Self::Email,
            "boolean" | "tinyint" => Self::Checkbox,
            _ => Self::Text,
        }
    }
}

const INPUT_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline";

fn blade_input(field: &FieldSpec, binding: ValueBinding<'_>) -> String {
    let name = &field.name;
    let label = field.label();
    let id = format!("field_{name}");
    let value = binding.render(name);

    match InputKind::for_type(&field.field_type) {
        kind @ (InputKind::Text | InputKind::Email) => {
            let input_type = if kind == InputKind::Email { "email" } else { "text" };
            format!(
                r#"            <div class="mb-4">
                <label for="{id}" class="block text-gray-700 font-bold mb-2">{label}</label>
                <input type="{input_type}" id="{id}" name="{name}" value="{value}"
                       class="{INPUT_CLASSES}"
                       required>
            </div>"#
            )
        }
        InputKind::Textarea => format!(
            r#"            <div class="mb-4">
                <label for="{id}" class="block text-gray-700 font-bold mb-2">{label}</label>
                <textarea id="{id}" name="{name}" rows="4"
                          class="{INPUT_CLASSES}"
                          required>{value}</textarea>
            </div>"#
        ),
        InputKind::Checkbox => format!(
            r#"            <div class="mb-4">
                <label class="flex items-center">
                    <input type="checkbox" id="{id}" name="{name}" value="1" class="mr-2">
                    <span class="text-gray-700">{label}</span>
                </label>
            </div>"#
        ),
    }
}

/// Form inputs for the create/edit views.
pub fn blade_form_fields(fields: &[FieldSpec], binding: ValueBinding<'_>) -> String {
    if fields.is_empty() {
        return "            {{-- Add your form fields here --}}".to_string();
    }
    fields
        .iter()
        .map(|f| blade_input(f, binding))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<dt>/<dd>` pairs for the show view.
pub fn blade_detail_fields(fields: &[FieldSpec], variable: &str) -> String {
    if fields.is_empty() {
        return "            {{-- Add detail fields here --}}".to_string();
    }
    fields
        .iter()
        .map(|f| {
            format!(
                r#"            <div class="border-b border-gray-200 py-2">
                <dt class="text-gray-500 font-semibold">{label}:</dt>
                <dd class="text-gray-900">{{{{ ${variable}->{name} }}}}</dd>
            </div>"#,
                label = f.label(),
                name = f.name,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body of the model's `$fillable` array.
pub fn fillable(fields: &[FieldSpec]) -> String {
    if fields.is_empty() {
        return "// 'field1', 'field2'".to_string();
    }
    fields
        .iter()
        .map(|f| format!("'{}'", f.name))
        .collect::<Vec<_>>()
        .join(",\n        ")
}

// ── Resource classes (form / table builders) ─────────────────────────────────

fn form_builder_type(field_type: &str) -> &'static str {
    match field_type.to_ascii_lowercase().as_str() {
        "string" => "text",
        "text" | "textarea" => "textarea",
        "email" => "email",
        "boolean" | "tinyint" => "checkbox",
        _ => "text",
    }
}

fn table_column_type(field_type: &str) -> &'static str {
    match field_type.to_ascii_lowercase().as_str() {
        "decimal" | "integer" | "bigint" => "number",
        "boolean" | "tinyint" => "boolean",
        "datetime" | "date" | "timestamp" => "datetime",
        _ => "text",
    }
}

/// `Form::text('title', 'Title'),` lines.
pub fn resource_form_fields(fields: &[FieldSpec]) -> String {
    if fields.is_empty() {
        return "            // Form::text('name', 'Name'),".to_string();
    }
    fields
        .iter()
        .map(|f| {
            format!(
                "            Form::{}('{}', '{}'),",
                form_builder_type(&f.field_type),
                f.name,
                f.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Table::text('title', 'Title'),` lines framed by the id and actions columns.
pub fn resource_table_columns(fields: &[FieldSpec]) -> String {
    if fields.is_empty() {
        return "            // Table::text('id', 'ID'),".to_string();
    }

    let mut columns = vec!["            Table::text('id', 'ID'),".to_string()];
    columns.extend(fields.iter().map(|f| {
        format!(
            "            Table::{}('{}', '{}'),",
            table_column_type(&f.field_type),
            f.name,
            f.label()
        )
    }));
    columns.push("            Table::actions(),".to_string());
    columns.join("\n")
}

/// `'title' => 'required',` lines.
pub fn validation_rules(fields: &[FieldSpec]) -> String {
    if fields.is_empty() {
        return "            // 'field' => 'required',".to_string();
    }
    fields
        .iter()
        .map(|f| format!("            '{}' => 'required',", f.name))
        .collect::<Vec<_>>()
        .join("\n")
}
