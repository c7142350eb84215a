use crate::clusterer::Point;
use crate::error::Result;
use crate::records::{GroupKey, StudentRun};
use std::collections::HashMap;

/// Runs sharing a day, window and destination
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub key: GroupKey,
    pub members: Vec<&'a StudentRun>,
}

impl<'a> Group<'a> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member coordinates, in member order
    pub fn points(&self) -> Result<Vec<Point>> {
        self.members.iter().map(|r| r.point()).collect()
    }
}

/// Split runs into groups keyed by (day, window start, window end, destination).
///
/// Groups come back in the order their key first appears in `runs`, and
/// members keep their input order. The shared random stream is consumed in
/// this order, so it must stay stable.
pub fn group_runs(runs: &[StudentRun]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for run in runs {
        let key = run.group_key();
        match index.get(&key) {
            Some(&i) => groups[i].members.push(run),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    members: vec![run],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(id: &str, day: &str, start: &str, uni: &str) -> StudentRun {
        StudentRun {
            run_id: format!("{}_{}-09:00", day, start),
            day: day.to_string(),
            time_window_start: start.to_string(),
            time_window_end: "09:00".to_string(),
            student_id: id.to_string(),
            home_lat: "40.7".to_string(),
            home_lng: "-74.0".to_string(),
            university_id: uni.to_string(),
        }
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let runs = vec![
            run("S1", "Wed", "08:00", "U02"),
            run("S2", "Mon", "08:00", "U01"),
            run("S3", "Wed", "08:00", "U02"),
            run("S4", "Mon", "08:00", "U02"),
            run("S5", "Mon", "08:00", "U01"),
        ];

        let groups = group_runs(&runs);
        assert_eq!(groups.len(), 3);

        assert_eq!(groups[0].key.day, "Wed");
        assert_eq!(groups[1].key.destination_id, "U01");
        assert_eq!(groups[2].key.destination_id, "U02");

        let ids: Vec<&str> = groups[1].members.iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(ids, vec!["S2", "S5"]);
    }

    #[test]
    fn test_window_end_splits_groups() {
        let mut late = run("S2", "Mon", "08:00", "U01");
        late.time_window_end = "10:00".to_string();
        let runs = vec![run("S1", "Mon", "08:00", "U01"), late];

        let groups = group_runs(&runs);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 1));
    }

    #[test]
    fn test_group_sizes_cover_input() {
        let runs: Vec<StudentRun> = (0..20)
            .map(|i| {
                let day = if i % 2 == 0 { "Mon" } else { "Tue" };
                let uni = if i % 3 == 0 { "U01" } else { "U02" };
                run(&format!("S{:02}", i), day, "07:30", uni)
            })
            .collect();

        let groups = group_runs(&runs);
        assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), runs.len());
    }

    #[test]
    fn test_no_runs_no_groups() {
        assert!(group_runs(&[]).is_empty());
    }
}
