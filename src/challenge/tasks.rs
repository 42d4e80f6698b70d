//! The fixed daily task checklist.
//!
//! Nine tasks per day: two workouts, diet compliance, four one-litre water
//! increments, a progress photo, and ten pages of reading. The set is fixed;
//! completing a day never clears it automatically.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the fixed daily checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TaskId {
    MorningWorkout,
    EveningWorkout,
    Diet,
    Water1,
    Water2,
    Water3,
    Water4,
    ProgressPhoto,
    Reading,
}

impl TaskId {
    /// All tasks, in checklist display order.
    pub const ALL: [TaskId; 9] = [
        TaskId::MorningWorkout,
        TaskId::EveningWorkout,
        TaskId::Diet,
        TaskId::Water1,
        TaskId::Water2,
        TaskId::Water3,
        TaskId::Water4,
        TaskId::ProgressPhoto,
        TaskId::Reading,
    ];

    /// Human-readable checklist label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskId::MorningWorkout => "Morning workout",
            TaskId::EveningWorkout => "Evening workout",
            TaskId::Diet => "Follow the diet",
            TaskId::Water1 => "Water 1L",
            TaskId::Water2 => "Water 2L",
            TaskId::Water3 => "Water 3L",
            TaskId::Water4 => "Water 4L",
            TaskId::ProgressPhoto => "Progress photo",
            TaskId::Reading => "Read 10 pages",
        }
    }
}

/// Completion flags for one day's checklist.
///
/// Field names match the persisted slot shape (`todayTasks`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyTasks {
    pub morning_workout: bool,
    pub evening_workout: bool,
    pub diet: bool,
    pub water1: bool,
    pub water2: bool,
    pub water3: bool,
    pub water4: bool,
    pub progress_photo: bool,
    pub reading: bool,
}

impl DailyTasks {
    /// Fixed checklist cardinality.
    pub const TOTAL: usize = 9;

    /// Completion flag for one task.
    pub fn is_done(&self, task: TaskId) -> bool {
        match task {
            TaskId::MorningWorkout => self.morning_workout,
            TaskId::EveningWorkout => self.evening_workout,
            TaskId::Diet => self.diet,
            TaskId::Water1 => self.water1,
            TaskId::Water2 => self.water2,
            TaskId::Water3 => self.water3,
            TaskId::Water4 => self.water4,
            TaskId::ProgressPhoto => self.progress_photo,
            TaskId::Reading => self.reading,
        }
    }

    /// Flip one task's flag. Self-inverse.
    pub fn toggle(&mut self, task: TaskId) {
        let flag = match task {
            TaskId::MorningWorkout => &mut self.morning_workout,
            TaskId::EveningWorkout => &mut self.evening_workout,
            TaskId::Diet => &mut self.diet,
            TaskId::Water1 => &mut self.water1,
            TaskId::Water2 => &mut self.water2,
            TaskId::Water3 => &mut self.water3,
            TaskId::Water4 => &mut self.water4,
            TaskId::ProgressPhoto => &mut self.progress_photo,
            TaskId::Reading => &mut self.reading,
        };
        *flag = !*flag;
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        TaskId::ALL.iter().filter(|t| self.is_done(**t)).count()
    }

    /// Whether every task is done.
    pub fn all_done(&self) -> bool {
        self.completed_count() == Self::TOTAL
    }
}
