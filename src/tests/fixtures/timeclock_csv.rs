// Shared test fixture for timeclock exports.
// Builds CSV text in the export's column layout, one row per `row` call.

pub const TIMECLOCK_HEADERS: [&str; 11] = [
    "Job",
    "Operation",
    "Team Member",
    "Started On Date",
    "Started On Time",
    "Started On Week",
    "Stopped On Date",
    "Stopped On Time",
    "Duration Hours",
    "Clock Type",
    "Labor Hours",
];

#[derive(Debug, Clone)]
pub struct TimeclockRow {
    pub job: String,
    pub operation: String,
    pub team_member: String,
    pub started_on_date: String,
    pub started_on_time: String,
    pub started_on_week: String,
    pub stopped_on_date: String,
    pub stopped_on_time: String,
    pub duration_hours: String,
    pub clock_type: String,
    pub labor_hours: String,
}

impl Default for TimeclockRow {
    fn default() -> Self {
        Self {
            job: "J-1001".into(),
            operation: "Machining".into(),
            team_member: "Bob".into(),
            started_on_date: "2024-09-12".into(),
            started_on_time: "08:00:00 AM".into(),
            started_on_week: "2024-W37".into(),
            stopped_on_date: "2024-09-12".into(),
            stopped_on_time: "12:00:00 PM".into(),
            duration_hours: "4.0".into(),
            clock_type: "Job".into(),
            labor_hours: "4.0".into(),
        }
    }
}

impl TimeclockRow {
    fn cells(&self) -> [&str; 11] {
        [
            &self.job,
            &self.operation,
            &self.team_member,
            &self.started_on_date,
            &self.started_on_time,
            &self.started_on_week,
            &self.stopped_on_date,
            &self.stopped_on_time,
            &self.duration_hours,
            &self.clock_type,
            &self.labor_hours,
        ]
    }
}

#[derive(Default)]
pub struct TimeclockCsvBuilder {
    rows: Vec<TimeclockRow>,
    without: Vec<&'static str>,
}

#[allow(dead_code)]
impl TimeclockCsvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, edit: impl FnOnce(&mut TimeclockRow)) -> Self {
        let mut row = TimeclockRow::default();
        edit(&mut row);
        self.rows.push(row);
        self
    }

    /// Drops a column from the header and from every row.
    pub fn without_column(mut self, name: &'static str) -> Self {
        self.without.push(name);
        self
    }

    pub fn build(self) -> String {
        let keep: Vec<usize> = TIMECLOCK_HEADERS
            .iter()
            .enumerate()
            .filter(|(_, header)| !self.without.contains(header))
            .map(|(index, _)| index)
            .collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(keep.iter().map(|i| TIMECLOCK_HEADERS[*i]))
            .unwrap();
        for row in &self.rows {
            let cells = row.cells();
            writer.write_record(keep.iter().map(|i| cells[*i])).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }
}
