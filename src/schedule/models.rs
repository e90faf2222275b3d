use serde::Deserialize;

/// Content of the schedule data file
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Every day record, in file order
    pub days: Vec<Day>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Day {
    /// Day's identifier, i.e.: "Day 3"
    pub day_id: String,

    /// Ordered list of the announcements of the day
    #[serde(default)]
    pub handbook: Vec<Announcement>,

    /// Ordered list of the timetable rows of the day
    #[serde(default)]
    pub timetable: Vec<Period>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Announcement {
    /// Free text
    #[serde(default)]
    pub announcement: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Period {
    /// Period label, i.e.: "1"
    pub period: String,

    /// Time range, i.e.: "08:00-08:45"
    pub time: String,

    /// Subject taught
    pub subject: String,

    /// Room or any remark
    pub location: String,
}
