//! Column descriptors.
//!
//! Descriptors are owned by the host. The grid never mutates one in place:
//! edits produce a replacement descriptor that is handed back to the host.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ColumnError;

/// Value type tag of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    Text,
    Number,
    Boolean,
    Checkbox,
    Date,
    Select,
    MultiSelect,
    Toggle,
    Rating,
    Custom,
}

impl ColumnType {
    pub const ALL: [ColumnType; 10] = [
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::Boolean,
        ColumnType::Checkbox,
        ColumnType::Date,
        ColumnType::Select,
        ColumnType::MultiSelect,
        ColumnType::Toggle,
        ColumnType::Rating,
        ColumnType::Custom,
    ];

    /// Wire name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Checkbox => "checkbox",
            ColumnType::Date => "date",
            ColumnType::Select => "select",
            ColumnType::MultiSelect => "multi-select",
            ColumnType::Toggle => "toggle",
            ColumnType::Rating => "rating",
            ColumnType::Custom => "custom",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a select or multi-select column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Opaque icon name, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Value type of a column, carrying the option list where the type has one.
///
/// Only `Select` and `MultiSelect` own options, so a descriptor can never
/// carry options that do not belong to its type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    Text,
    Number,
    Boolean,
    Checkbox,
    Date,
    Select(Vec<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Toggle,
    Rating,
    Custom,
}

impl ColumnKind {
    /// Kind for a type tag, with an empty option list where one is needed.
    pub fn empty(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Text => ColumnKind::Text,
            ColumnType::Number => ColumnKind::Number,
            ColumnType::Boolean => ColumnKind::Boolean,
            ColumnType::Checkbox => ColumnKind::Checkbox,
            ColumnType::Date => ColumnKind::Date,
            ColumnType::Select => ColumnKind::Select(Vec::new()),
            ColumnType::MultiSelect => ColumnKind::MultiSelect(Vec::new()),
            ColumnType::Toggle => ColumnKind::Toggle,
            ColumnType::Rating => ColumnKind::Rating,
            ColumnType::Custom => ColumnKind::Custom,
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnKind::Text => ColumnType::Text,
            ColumnKind::Number => ColumnType::Number,
            ColumnKind::Boolean => ColumnType::Boolean,
            ColumnKind::Checkbox => ColumnType::Checkbox,
            ColumnKind::Date => ColumnType::Date,
            ColumnKind::Select(_) => ColumnType::Select,
            ColumnKind::MultiSelect(_) => ColumnType::MultiSelect,
            ColumnKind::Toggle => ColumnType::Toggle,
            ColumnKind::Rating => ColumnType::Rating,
            ColumnKind::Custom => ColumnType::Custom,
        }
    }

    /// Option list for select and multi-select kinds.
    pub fn options(&self) -> Option<&[SelectOption]> {
        match self {
            ColumnKind::Select(options) | ColumnKind::MultiSelect(options) => Some(options),
            _ => None,
        }
    }
}

/// Capability flags of a column. All default to off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnFlags {
    pub sortable: bool,
    pub resizable: bool,
    pub draggable: bool,
    pub editable: bool,
    pub deletable: bool,
    pub hidden: bool,
}

/// Static configuration for one grid column.
///
/// # Examples
///
/// ```
/// use datagrid::model::Column;
///
/// let age = Column::number("age", "Age")
///     .min_width(50.0)
///     .sortable()
///     .resizable();
/// assert!(age.flags.sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColumnConfig", into = "ColumnConfig")]
pub struct Column {
    /// Unique identifier for this column.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Value type and its options.
    pub kind: ColumnKind,
    /// Lower width bound in pixels.
    pub min_width: Option<f64>,
    /// Upper width bound in pixels; unbounded when absent.
    pub max_width: Option<f64>,
    pub flags: ColumnFlags,
}

impl Column {
    /// Create a column with all capability flags off.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            min_width: None,
            max_width: None,
            flags: ColumnFlags::default(),
        }
    }

    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, ColumnKind::Text)
    }

    pub fn number(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, ColumnKind::Number)
    }

    pub fn boolean(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, ColumnKind::Boolean)
    }

    pub fn date(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, ColumnKind::Date)
    }

    pub fn select(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(id, label, ColumnKind::Select(options))
    }

    pub fn multi_select(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(id, label, ColumnKind::MultiSelect(options))
    }

    pub fn rating(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, ColumnKind::Rating)
    }

    pub fn toggle(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, ColumnKind::Toggle)
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.flags.sortable = true;
        self
    }

    pub fn resizable(mut self) -> Self {
        self.flags.resizable = true;
        self
    }

    pub fn draggable(mut self) -> Self {
        self.flags.draggable = true;
        self
    }

    pub fn editable(mut self) -> Self {
        self.flags.editable = true;
        self
    }

    pub fn deletable(mut self) -> Self {
        self.flags.deletable = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.flags.hidden = true;
        self
    }

    pub fn column_type(&self) -> ColumnType {
        self.kind.column_type()
    }

    /// Produce the replacement descriptor for an edit.
    ///
    /// Switching to select keeps existing select options, switching to
    /// multi-select keeps existing multi-select options; any other type
    /// drops options.
    pub fn apply_edit(&self, edit: &ColumnEdit) -> Column {
        let kind = match (edit.column_type, &self.kind) {
            (ColumnType::Select, ColumnKind::Select(options)) => ColumnKind::Select(options.clone()),
            (ColumnType::MultiSelect, ColumnKind::MultiSelect(options)) => {
                ColumnKind::MultiSelect(options.clone())
            }
            (ty, _) => ColumnKind::empty(ty),
        };

        Column {
            id: self.id.clone(),
            label: edit.label.clone(),
            kind,
            min_width: self.min_width,
            max_width: self.max_width,
            flags: edit.flags,
        }
    }
}

/// Editable subset of a column descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnEdit {
    pub label: String,
    pub column_type: ColumnType,
    pub flags: ColumnFlags,
}

impl ColumnEdit {
    /// Start an edit from the column's current values.
    pub fn from_column(column: &Column) -> Self {
        Self {
            label: column.label.clone(),
            column_type: column.column_type(),
            flags: column.flags,
        }
    }
}

// =============================================================================
// Wire form
// =============================================================================

/// Flat wire form of a column descriptor, as hosts send it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default)]
    pub is_sortable: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_resizable: bool,
    #[serde(default)]
    pub is_editable: bool,
    #[serde(default)]
    pub is_deletable: bool,
    #[serde(default)]
    pub is_draggable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_select_options: Option<Vec<SelectOption>>,
}

impl TryFrom<ColumnConfig> for Column {
    type Error = ColumnError;

    fn try_from(config: ColumnConfig) -> Result<Self, Self::Error> {
        if config.id.is_empty() {
            return Err(ColumnError::EmptyId);
        }

        let ty = config.column_type;
        let kind = match ty {
            ColumnType::Select => {
                if config.multi_select_options.is_some() {
                    return Err(ColumnError::unexpected_options(config.id, ty, "multiSelectOptions"));
                }
                ColumnKind::Select(config.select_options.unwrap_or_default())
            }
            ColumnType::MultiSelect => {
                if config.select_options.is_some() {
                    return Err(ColumnError::unexpected_options(config.id, ty, "selectOptions"));
                }
                ColumnKind::MultiSelect(config.multi_select_options.unwrap_or_default())
            }
            _ => {
                if config.select_options.is_some() {
                    return Err(ColumnError::unexpected_options(config.id, ty, "selectOptions"));
                }
                if config.multi_select_options.is_some() {
                    return Err(ColumnError::unexpected_options(config.id, ty, "multiSelectOptions"));
                }
                ColumnKind::empty(ty)
            }
        };

        if let (Some(min), Some(max)) = (config.min_width, config.max_width)
            && min > max
        {
            return Err(ColumnError::InvalidBounds {
                column: config.id,
                min,
                max,
            });
        }

        let label = if config.label.is_empty() {
            config.id.clone()
        } else {
            config.label
        };

        Ok(Column {
            id: config.id,
            label,
            kind,
            min_width: config.min_width,
            max_width: config.max_width,
            flags: ColumnFlags {
                sortable: config.is_sortable,
                resizable: config.is_resizable,
                draggable: config.is_draggable,
                editable: config.is_editable,
                deletable: config.is_deletable,
                hidden: config.is_hidden,
            },
        })
    }
}

impl From<Column> for ColumnConfig {
    fn from(column: Column) -> Self {
        let column_type = column.column_type();
        let (select_options, multi_select_options) = match column.kind {
            ColumnKind::Select(options) => (Some(options), None),
            ColumnKind::MultiSelect(options) => (None, Some(options)),
            _ => (None, None),
        };

        ColumnConfig {
            id: column.id,
            label: column.label,
            column_type,
            min_width: column.min_width,
            max_width: column.max_width,
            is_sortable: column.flags.sortable,
            is_hidden: column.flags.hidden,
            is_resizable: column.flags.resizable,
            is_editable: column.flags.editable,
            is_deletable: column.flags.deletable,
            is_draggable: column.flags.draggable,
            select_options,
            multi_select_options,
        }
    }
}
