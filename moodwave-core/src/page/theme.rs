/// Observed page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    January,
    February,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::January, Region::February];

    /// Marker class carried by the section element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::January => 0,
            Self::February => 1,
        }
    }
}

/// Ambient page theme class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeClass {
    Ocean,
    Pink,
}

impl ThemeClass {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Pink => "pink",
        }
    }
}

/// Theme classes present on the page container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ThemeState {
    pub ocean: bool,
    pub pink: bool,
}

impl ThemeState {
    pub fn add(&mut self, class: ThemeClass) {
        *self.flag_mut(class) = true;
    }

    pub fn remove(&mut self, class: ThemeClass) {
        *self.flag_mut(class) = false;
    }

    pub fn contains(&self, class: ThemeClass) -> bool {
        match class {
            ThemeClass::Ocean => self.ocean,
            ThemeClass::Pink => self.pink,
        }
    }

    /// CSS class list, in a fixed order.
    pub fn classes(&self) -> Vec<&'static str> {
        [ThemeClass::Ocean, ThemeClass::Pink]
            .into_iter()
            .filter(|c| self.contains(*c))
            .map(ThemeClass::css_class)
            .collect()
    }

    /// At most one theme class is present.
    pub fn is_exclusive(&self) -> bool {
        !(self.ocean && self.pink)
    }

    fn flag_mut(&mut self, class: ThemeClass) -> &mut bool {
        match class {
            ThemeClass::Ocean => &mut self.ocean,
            ThemeClass::Pink => &mut self.pink,
        }
    }
}
