use super::gate::{validate, ContactFormInput, Field, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Last observed scroll offset and pointer position. No invariant beyond
/// "most recent sample wins".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub pointer: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// The introduce-yourself gate. Starts in `Editing` and moves to `Released`
/// at most once per session; `Released` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum GateState {
    Editing {
        input: ContactFormInput,
        errors: ValidationErrors,
    },
    Released,
}

impl Default for GateState {
    fn default() -> Self {
        Self::Editing {
            input: ContactFormInput::default(),
            errors: ValidationErrors::default(),
        }
    }
}

impl GateState {
    pub fn is_released(&self) -> bool {
        matches!(self, Self::Released)
    }

    pub fn input(&self) -> ContactFormInput {
        match self {
            Self::Editing { input, .. } => input.clone(),
            Self::Released => ContactFormInput::default(),
        }
    }

    pub fn errors(&self) -> ValidationErrors {
        match self {
            Self::Editing { errors, .. } => *errors,
            Self::Released => ValidationErrors::default(),
        }
    }
}

/// One snapshot of everything the page tracks. Components read derived
/// slices of this; all writes go through [`PageState::apply`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub viewport: ViewportState,
    pub menu: MenuState,
    pub gate: GateState,
    pub cursor_hover: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled(f64),
    PointerMoved(f64, f64),
    HoverChanged(bool),
    MenuToggled,
    MenuItemSelected,
    FieldEdited(Field, String),
    GateSubmitted,
}

impl PageState {
    /// Advance the snapshot by one event. Pure and synchronous; the rendering
    /// layer never mutates state any other way.
    pub fn apply(mut self, event: PageEvent) -> Self {
        match event {
            PageEvent::Scrolled(offset) => self.viewport.scroll_offset = offset,
            PageEvent::PointerMoved(x, y) => self.viewport.pointer = Point { x, y },
            PageEvent::HoverChanged(active) => self.cursor_hover = active,
            PageEvent::MenuToggled => self.menu = self.menu.toggled(),
            // Selecting an item navigates and closes the menu as a side effect.
            PageEvent::MenuItemSelected => self.menu = MenuState::Closed,
            PageEvent::FieldEdited(field, value) => {
                if let GateState::Editing { input, .. } = &mut self.gate {
                    input.set(field, value);
                }
            }
            PageEvent::GateSubmitted => {
                if let GateState::Editing { input, errors } = &mut self.gate {
                    let attempt = validate(input);
                    if attempt.is_empty() {
                        // The collected input is discarded along with the
                        // editing state; nothing is persisted.
                        self.gate = GateState::Released;
                    } else {
                        *errors = attempt;
                    }
                }
            }
        }
        self
    }
}
