//! Sidebar state and the shell layout derived from it

/// Sidebar flags shared by the shell, sidebar and header.
///
/// Not persisted; a reload starts expanded and closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    /// Desktop sidebar expanded (wide) rather than collapsed (icons only)
    pub is_expanded: bool,
    /// Mobile sidebar drawer open
    pub is_open: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            is_expanded: true,
            is_open: false,
        }
    }
}

impl LayoutState {
    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    pub fn open_mobile(&mut self) {
        self.is_open = true;
    }

    pub fn close_mobile(&mut self) {
        self.is_open = false;
    }

    /// Left offset of the fixed header
    pub fn header_offset(&self) -> SidebarOffset {
        if self.is_open || self.is_expanded {
            SidebarOffset::Wide
        } else {
            SidebarOffset::Narrow
        }
    }
}

/// Left offset reserved for the desktop sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarOffset {
    None,
    Wide,
    Narrow,
}

impl SidebarOffset {
    fn from_expanded(is_expanded: bool) -> Self {
        if is_expanded {
            SidebarOffset::Wide
        } else {
            SidebarOffset::Narrow
        }
    }

    pub fn margin_class(&self) -> &'static str {
        match self {
            SidebarOffset::None => "",
            SidebarOffset::Wide => "lg:ml-64",
            SidebarOffset::Narrow => "lg:ml-20",
        }
    }

    pub fn left_class(&self) -> &'static str {
        match self {
            SidebarOffset::None => "lg:left-0",
            SidebarOffset::Wide => "lg:left-64",
            SidebarOffset::Narrow => "lg:left-20",
        }
    }
}

/// Chrome visibility and content offsets for one render of the admin shell.
///
/// A pure function of the route, the session and the sidebar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub show_chrome: bool,
    pub content_padding: bool,
    pub content_offset: SidebarOffset,
}

impl ShellLayout {
    pub fn compute(on_login_route: bool, authenticated: bool, is_expanded: bool) -> Self {
        let show_chrome = !on_login_route && authenticated;
        Self {
            show_chrome,
            content_padding: show_chrome,
            content_offset: if show_chrome {
                SidebarOffset::from_expanded(is_expanded)
            } else {
                SidebarOffset::None
            },
        }
    }

    /// Offset for the footer, which tracks the sidebar width like the content
    pub fn footer_offset(&self) -> SidebarOffset {
        self.content_offset
    }

    /// Tailwind classes for the routed content container
    pub fn content_class(&self) -> String {
        let mut classes = vec!["min-h-screen", "bg-slate-50", "px-6"];
        if self.content_padding {
            classes.push("pt-16 pb-12");
        }
        let margin = self.content_offset.margin_class();
        if !margin.is_empty() {
            classes.push(margin);
        }
        classes.push("transition-all duration-300");
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_hidden_on_login_route() {
        let layout = ShellLayout::compute(true, true, true);
        assert!(!layout.show_chrome);
        assert!(!layout.content_padding);
        assert_eq!(layout.content_offset, SidebarOffset::None);
    }

    #[test]
    fn test_chrome_hidden_without_session() {
        let layout = ShellLayout::compute(false, false, true);
        assert!(!layout.show_chrome);
        assert_eq!(layout.content_class(), "min-h-screen bg-slate-50 px-6 transition-all duration-300");
    }

    #[test]
    fn test_offset_follows_sidebar_width() {
        let wide = ShellLayout::compute(false, true, true);
        assert!(wide.show_chrome);
        assert_eq!(wide.content_offset, SidebarOffset::Wide);
        assert!(wide.content_class().contains("pt-16 pb-12"));
        assert!(wide.content_class().contains("lg:ml-64"));

        let narrow = ShellLayout::compute(false, true, false);
        assert_eq!(narrow.content_offset, SidebarOffset::Narrow);
        assert!(narrow.content_class().contains("lg:ml-20"));
    }

    #[test]
    fn test_header_offset_widens_when_mobile_open() {
        let mut state = LayoutState::default();
        assert_eq!(state.header_offset(), SidebarOffset::Wide);

        state.toggle_expanded();
        assert_eq!(state.header_offset(), SidebarOffset::Narrow);

        state.open_mobile();
        assert_eq!(state.header_offset(), SidebarOffset::Wide);

        state.close_mobile();
        assert!(!state.is_open);
    }
}
