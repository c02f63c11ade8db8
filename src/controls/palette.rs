use std::borrow::Cow;

/// Glyphs and toggling behaviour for checkbox-style controls.
#[derive(Debug, Clone)]
pub struct ToggleGlyphs {
    pub checked: Cow<'static, str>,
    pub unchecked: Cow<'static, str>,
    pub toggle_with_space: bool,
    pub toggle_with_enter: bool,
}

impl ToggleGlyphs {
    pub fn with_glyphs(
        mut self,
        checked: impl Into<Cow<'static, str>>,
        unchecked: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.checked = checked.into();
        self.unchecked = unchecked.into();
        self
    }

    pub fn with_toggle_with_space(mut self, enabled: bool) -> Self {
        self.toggle_with_space = enabled;
        self
    }

    pub fn with_toggle_with_enter(mut self, enabled: bool) -> Self {
        self.toggle_with_enter = enabled;
        self
    }
}

impl Default for ToggleGlyphs {
    fn default() -> Self {
        Self {
            checked: Cow::Borrowed("[x]"),
            unchecked: Cow::Borrowed("[ ]"),
            toggle_with_space: true,
            toggle_with_enter: true,
        }
    }
}

/// Glyphs for radio-style single-choice rows.
#[derive(Debug, Clone)]
pub struct RadioGlyphs {
    pub selected: Cow<'static, str>,
    pub unselected: Cow<'static, str>,
}

impl RadioGlyphs {
    pub fn with_glyphs(
        mut self,
        selected: impl Into<Cow<'static, str>>,
        unselected: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.selected = selected.into();
        self.unselected = unselected.into();
        self
    }
}

impl Default for RadioGlyphs {
    fn default() -> Self {
        Self {
            selected: Cow::Borrowed("(•)"),
            unselected: Cow::Borrowed("( )"),
        }
    }
}

/// Presentation of select-style controls.
#[derive(Debug, Clone)]
pub struct SelectPresentation {
    pub empty_label: Cow<'static, str>,
    pub wrap_around: bool,
}

impl SelectPresentation {
    pub fn with_empty_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.empty_label = label.into();
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_around = wrap;
        self
    }
}

impl Default for SelectPresentation {
    fn default() -> Self {
        Self {
            empty_label: Cow::Borrowed("(none)"),
            wrap_around: true,
        }
    }
}

/// User-facing hints for the dynamic array editor.
#[derive(Debug, Clone)]
pub struct ArrayHints {
    pub add_hint: Cow<'static, str>,
    pub edit_hint: Cow<'static, str>,
}

impl ArrayHints {
    pub fn with_add_hint(mut self, hint: impl Into<Cow<'static, str>>) -> Self {
        self.add_hint = hint.into();
        self
    }

    pub fn with_edit_hint(mut self, hint: impl Into<Cow<'static, str>>) -> Self {
        self.edit_hint = hint.into();
        self
    }
}

impl Default for ArrayHints {
    fn default() -> Self {
        Self {
            add_hint: Cow::Borrowed("[+] Ctrl+N adds a row"),
            edit_hint: Cow::Borrowed("(Ctrl+←/→ select, Ctrl+D remove)"),
        }
    }
}

/// Caller-supplied presentation configuration shared by the controls.
/// Carries glyphs, copy text, and toggling behaviour only; the values a
/// control binds (checked state, field value, change/blur wiring) are
/// never configurable from here.
#[derive(Debug, Clone, Default)]
pub struct ControlPalette {
    pub toggles: ToggleGlyphs,
    pub radios: RadioGlyphs,
    pub selects: SelectPresentation,
    pub arrays: ArrayHints,
}

impl ControlPalette {
    pub fn with_toggles(mut self, toggles: ToggleGlyphs) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn with_radios(mut self, radios: RadioGlyphs) -> Self {
        self.radios = radios;
        self
    }

    pub fn with_selects(mut self, selects: SelectPresentation) -> Self {
        self.selects = selects;
        self
    }

    pub fn with_arrays(mut self, arrays: ArrayHints) -> Self {
        self.arrays = arrays;
        self
    }
}
