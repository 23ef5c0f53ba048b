/// One tab of the object-selection window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    Rides,
    SmallScenery,
    LargeScenery,
    Walls,
    Banners,
    Footpaths,
    PathAdditions,
    SceneryGroups,
    ParkEntrance,
    Water,
}

impl ObjectCategory {
    pub const ALL: [ObjectCategory; 10] = [
        ObjectCategory::Rides,
        ObjectCategory::SmallScenery,
        ObjectCategory::LargeScenery,
        ObjectCategory::Walls,
        ObjectCategory::Banners,
        ObjectCategory::Footpaths,
        ObjectCategory::PathAdditions,
        ObjectCategory::SceneryGroups,
        ObjectCategory::ParkEntrance,
        ObjectCategory::Water,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ObjectCategory::Rides => "Rides",
            ObjectCategory::SmallScenery => "Small Scenery",
            ObjectCategory::LargeScenery => "Large Scenery",
            ObjectCategory::Walls => "Walls",
            ObjectCategory::Banners => "Banners",
            ObjectCategory::Footpaths => "Footpaths",
            ObjectCategory::PathAdditions => "Path Additions",
            ObjectCategory::SceneryGroups => "Scenery Groups",
            ObjectCategory::ParkEntrance => "Park Entrance",
            ObjectCategory::Water => "Water",
        }
    }

    /// Minimum number of selected objects a valid scenario needs in this
    /// category. Zero means the category is optional.
    pub fn required_minimum(self) -> usize {
        match self {
            ObjectCategory::Rides => 1,
            ObjectCategory::Footpaths => 1,
            ObjectCategory::ParkEntrance => 1,
            ObjectCategory::Water => 1,
            _ => 0,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// Selection counts per object category, edited in the ObjectSelection stage
/// and validated before the editor may advance.
#[derive(Debug, Clone)]
pub struct ObjectSelection {
    counts: [usize; ObjectCategory::ALL.len()],
    finalized: bool,
}

impl Default for ObjectSelection {
    fn default() -> Self {
        Self {
            counts: [0; ObjectCategory::ALL.len()],
            finalized: false,
        }
    }
}

impl ObjectSelection {
    pub fn count(&self, category: ObjectCategory) -> usize {
        self.counts[category.index()]
    }

    pub fn set_count(&mut self, category: ObjectCategory, count: usize) {
        self.counts[category.index()] = count;
    }

    /// First category still below its required minimum, in tab order.
    pub fn first_missing(&self) -> Option<ObjectCategory> {
        ObjectCategory::ALL
            .into_iter()
            .find(|c| self.count(*c) < c.required_minimum())
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Marks the selection as committed. Called once validation has passed
    /// and the editor moves on to the landscape stage.
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}
