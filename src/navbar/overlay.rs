//! Overlay visibility flags owned by one navbar instance.

/// A surface the navbar can open or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    MobileMenu,
    ProfileMenu,
    Search,
    Chat,
}

/// One independent flag per overlay.
///
/// Flags never constrain each other: search, chat and the profile menu can
/// all be open at once. Notification-center visibility is not tracked here;
/// the notification collaborator owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    mobile_menu_open: bool,
    profile_menu_open: bool,
    search_open: bool,
    chat_open: bool,
}

impl OverlayState {
    /// All overlays closed.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::MobileMenu => self.mobile_menu_open,
            Overlay::ProfileMenu => self.profile_menu_open,
            Overlay::Search => self.search_open,
            Overlay::Chat => self.chat_open,
        }
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn profile_menu_open(&self) -> bool {
        self.profile_menu_open
    }

    pub fn search_open(&self) -> bool {
        self.search_open
    }

    pub fn chat_open(&self) -> bool {
        self.chat_open
    }

    /// Overlays currently open, in a stable order.
    pub fn open_overlays(&self) -> Vec<Overlay> {
        [Overlay::MobileMenu, Overlay::ProfileMenu, Overlay::Search, Overlay::Chat]
            .into_iter()
            .filter(|o| self.is_open(*o))
            .collect()
    }

    // ===== Builders (used by the reducer) =====

    /// Copy of this state with one flag replaced.
    pub(crate) fn with(mut self, overlay: Overlay, open: bool) -> Self {
        *self.flag_mut(overlay) = open;
        self
    }

    /// Copy of this state with one flag inverted.
    pub(crate) fn toggled(self, overlay: Overlay) -> Self {
        let open = self.is_open(overlay);
        self.with(overlay, !open)
    }

    fn flag_mut(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::MobileMenu => &mut self.mobile_menu_open,
            Overlay::ProfileMenu => &mut self.profile_menu_open,
            Overlay::Search => &mut self.search_open,
            Overlay::Chat => &mut self.chat_open,
        }
    }
}
