//! Category registry: static mapping of component files to functional
//! categories, used by catalog listing and assistant-doc grouping.
//!
//! Components not listed default to `DataDisplay`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Actions,
    Forms,
    DataDisplay,
    Feedback,
    Navigation,
    Layout,
    Overlays,
    Typography,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Actions,
        Category::Forms,
        Category::DataDisplay,
        Category::Feedback,
        Category::Navigation,
        Category::Layout,
        Category::Overlays,
        Category::Typography,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Actions => "actions",
            Category::Forms => "forms",
            Category::DataDisplay => "data-display",
            Category::Feedback => "feedback",
            Category::Navigation => "navigation",
            Category::Layout => "layout",
            Category::Overlays => "overlays",
            Category::Typography => "typography",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Actions => "Actions",
            Category::Forms => "Forms",
            Category::DataDisplay => "Data Display",
            Category::Feedback => "Feedback",
            Category::Navigation => "Navigation",
            Category::Layout => "Layout",
            Category::Overlays => "Overlays",
            Category::Typography => "Typography",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Actions => "Buttons, toggles, and interactive controls",
            Category::Forms => "Input fields, selects, checkboxes, and form controls",
            Category::DataDisplay => "Tables, lists, cards, and data visualization",
            Category::Feedback => "Alerts, notifications, loading states, and progress",
            Category::Navigation => "Menus, tabs, breadcrumbs, and navigation patterns",
            Category::Layout => "Containers, grids, separators, and spacing",
            Category::Overlays => "Modals, dialogs, popovers, and drawers",
            Category::Typography => "Text, labels, and typographic elements",
        }
    }
}

/// Filename -> category table. Kept flat so the catalog stays greppable.
const COMPONENT_CATEGORIES: &[(&str, Category)] = &[
    // Actions
    ("button.tsx", Category::Actions),
    ("toggle.tsx", Category::Actions),
    ("toggle-group.tsx", Category::Actions),
    ("switch.tsx", Category::Actions),
    ("copy-button.tsx", Category::Actions),
    ("menu-button.tsx", Category::Actions),
    // Forms
    ("input.tsx", Category::Forms),
    ("textarea.tsx", Category::Forms),
    ("text-area.tsx", Category::Forms),
    ("select.tsx", Category::Forms),
    ("checkbox.tsx", Category::Forms),
    ("radio-group.tsx", Category::Forms),
    ("slider.tsx", Category::Forms),
    ("form.tsx", Category::Forms),
    ("label.tsx", Category::Forms),
    ("input-otp.tsx", Category::Forms),
    ("input-group.tsx", Category::Forms),
    ("number-input.tsx", Category::Forms),
    ("search.tsx", Category::Forms),
    ("combobox.tsx", Category::Forms),
    ("multi-select.tsx", Category::Forms),
    ("date-picker.tsx", Category::Forms),
    ("time-picker.tsx", Category::Forms),
    ("file-uploader.tsx", Category::Forms),
    ("fluid-form.tsx", Category::Forms),
    // Data Display
    ("table.tsx", Category::DataDisplay),
    ("data-table.tsx", Category::DataDisplay),
    ("card.tsx", Category::DataDisplay),
    ("avatar.tsx", Category::DataDisplay),
    ("badge.tsx", Category::DataDisplay),
    ("tag.tsx", Category::DataDisplay),
    ("list.tsx", Category::DataDisplay),
    ("structured-list.tsx", Category::DataDisplay),
    ("accordion.tsx", Category::DataDisplay),
    ("collapsible.tsx", Category::DataDisplay),
    ("carousel.tsx", Category::DataDisplay),
    ("chart.tsx", Category::DataDisplay),
    ("tree-view.tsx", Category::DataDisplay),
    ("code-snippet.tsx", Category::DataDisplay),
    ("tile.tsx", Category::DataDisplay),
    ("aspect-ratio.tsx", Category::DataDisplay),
    ("skeleton.tsx", Category::DataDisplay),
    ("hover-card.tsx", Category::DataDisplay),
    // Charts
    ("charts/index.tsx", Category::DataDisplay),
    ("charts/bar-chart.tsx", Category::DataDisplay),
    ("charts/line-chart.tsx", Category::DataDisplay),
    ("charts/area-chart.tsx", Category::DataDisplay),
    ("charts/pie-chart.tsx", Category::DataDisplay),
    ("charts/gauge-chart.tsx", Category::DataDisplay),
    ("charts/sparkline.tsx", Category::DataDisplay),
    ("charts/combo-chart.tsx", Category::DataDisplay),
    ("charts/heatmap.tsx", Category::DataDisplay),
    ("charts/treemap.tsx", Category::DataDisplay),
    ("charts/radar-chart.tsx", Category::DataDisplay),
    ("charts/funnel-chart.tsx", Category::DataDisplay),
    ("charts/scatter-chart.tsx", Category::DataDisplay),
    ("charts/waterfall-chart.tsx", Category::DataDisplay),
    // Feedback
    ("alert.tsx", Category::Feedback),
    ("notification.tsx", Category::Feedback),
    ("actionable-notification.tsx", Category::Feedback),
    ("toaster.tsx", Category::Feedback),
    ("progress.tsx", Category::Feedback),
    ("loading.tsx", Category::Feedback),
    ("inline-loading.tsx", Category::Feedback),
    ("spinner.tsx", Category::Feedback),
    ("tooltip.tsx", Category::Feedback),
    ("definition-tooltip.tsx", Category::Feedback),
    ("toggle-tip.tsx", Category::Feedback),
    // Navigation
    ("tabs.tsx", Category::Navigation),
    ("breadcrumb.tsx", Category::Navigation),
    ("pagination.tsx", Category::Navigation),
    ("menubar.tsx", Category::Navigation),
    ("navigation-menu.tsx", Category::Navigation),
    ("dropdown-menu.tsx", Category::Navigation),
    ("context-menu.tsx", Category::Navigation),
    ("command.tsx", Category::Navigation),
    ("side-nav.tsx", Category::Navigation),
    ("sidebar.tsx", Category::Navigation),
    ("ui-shell-header.tsx", Category::Navigation),
    ("content-switcher.tsx", Category::Navigation),
    ("overflow-menu.tsx", Category::Navigation),
    ("link.tsx", Category::Navigation),
    // Layout
    ("separator.tsx", Category::Layout),
    ("resizable.tsx", Category::Layout),
    ("scroll-area.tsx", Category::Layout),
    ("layer.tsx", Category::Layout),
    // Overlays
    ("dialog.tsx", Category::Overlays),
    ("modal.tsx", Category::Overlays),
    ("drawer.tsx", Category::Overlays),
    ("sheet.tsx", Category::Overlays),
    ("popover.tsx", Category::Overlays),
    ("tearsheet.tsx", Category::Overlays),
    // Typography
    ("kbd.tsx", Category::Typography),
];

/// Category for a component file; unlisted files fall back to data-display.
pub fn category_for(id: &str) -> Category {
    COMPONENT_CATEGORIES
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, category)| *category)
        .unwrap_or(Category::DataDisplay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_components() {
        assert_eq!(category_for("button.tsx"), Category::Actions);
        assert_eq!(category_for("dialog.tsx"), Category::Overlays);
        assert_eq!(category_for("charts/bar-chart.tsx"), Category::DataDisplay);
        assert_eq!(category_for("kbd.tsx"), Category::Typography);
    }

    #[test]
    fn test_unknown_defaults_to_data_display() {
        assert_eq!(category_for("not-a-component.tsx"), Category::DataDisplay);
    }

    #[test]
    fn test_category_metadata() {
        assert_eq!(Category::DataDisplay.id(), "data-display");
        assert_eq!(Category::DataDisplay.name(), "Data Display");
        assert_eq!(Category::ALL.len(), 8);
    }
}
