//! Styling overrides keyed by structural region.
//!
//! Values are opaque to the grid; they are stored and handed back verbatim.

use serde::Deserialize;
use serde::Serialize;

/// Structural region of the grid that can carry a class override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Root,
    Table,
    HeaderWrapper,
    HeaderRow,
    HeaderCell,
    DragHandle,
    ResizeHandle,
    BodyWrapper,
    BodyRow,
    SelectedRow,
    BodyCell,
    Badge,
    Checkbox,
    RatingStar,
    ToggleSwitch,
    DateTrigger,
    Calendar,
    SelectTrigger,
    SelectContent,
    SelectItem,
    MultiSelectTrigger,
    MultiSelectContent,
    MultiSelectCommand,
    MultiSelectInput,
    MultiSelectItem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderClassNames {
    pub wrapper: Option<String>,
    pub row: Option<String>,
    pub cell: Option<String>,
    pub drag_handle: Option<String>,
    pub resize_handle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyClassNames {
    pub wrapper: Option<String>,
    pub row: Option<String>,
    pub selected_row: Option<String>,
    pub cell: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentClassNames {
    pub badge: Option<String>,
    pub checkbox: Option<String>,
    pub rating_star: Option<String>,
    pub toggle_switch: Option<String>,
    pub date_trigger: Option<String>,
    pub calendar: Option<String>,
    pub select_trigger: Option<String>,
    pub select_content: Option<String>,
    pub select_item: Option<String>,
    pub multi_select_trigger: Option<String>,
    pub multi_select_content: Option<String>,
    pub multi_select_command: Option<String>,
    pub multi_select_input: Option<String>,
    pub multi_select_item: Option<String>,
}

/// Per-region class name overrides supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassNames {
    pub root: Option<String>,
    pub table: Option<String>,
    pub header: HeaderClassNames,
    pub body: BodyClassNames,
    pub components: ComponentClassNames,
}

impl ClassNames {
    /// Look up the override for a region.
    pub fn get(&self, region: Region) -> Option<&str> {
        let h = &self.header;
        let b = &self.body;
        let c = &self.components;
        let slot = match region {
            Region::Root => &self.root,
            Region::Table => &self.table,
            Region::HeaderWrapper => &h.wrapper,
            Region::HeaderRow => &h.row,
            Region::HeaderCell => &h.cell,
            Region::DragHandle => &h.drag_handle,
            Region::ResizeHandle => &h.resize_handle,
            Region::BodyWrapper => &b.wrapper,
            Region::BodyRow => &b.row,
            Region::SelectedRow => &b.selected_row,
            Region::BodyCell => &b.cell,
            Region::Badge => &c.badge,
            Region::Checkbox => &c.checkbox,
            Region::RatingStar => &c.rating_star,
            Region::ToggleSwitch => &c.toggle_switch,
            Region::DateTrigger => &c.date_trigger,
            Region::Calendar => &c.calendar,
            Region::SelectTrigger => &c.select_trigger,
            Region::SelectContent => &c.select_content,
            Region::SelectItem => &c.select_item,
            Region::MultiSelectTrigger => &c.multi_select_trigger,
            Region::MultiSelectContent => &c.multi_select_content,
            Region::MultiSelectCommand => &c.multi_select_command,
            Region::MultiSelectInput => &c.multi_select_input,
            Region::MultiSelectItem => &c.multi_select_item,
        };
        slot.as_deref()
    }
}
