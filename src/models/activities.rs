/// One extracurricular activity and its roster of signed-up students.
///
/// Participants are stored in signup order; the email string is the only
/// identity a student has here.
#[derive(Debug, Clone)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}
