use crate::error::ClassroomError;
use crate::logger;
use crate::models::Role;
use crate::store::ClassroomStore;

/// Marks every student present and returns their names in registration order.
pub fn mark_attendance_for_all_students(store: &mut ClassroomStore) -> Vec<String> {
    let marked: Vec<String> = store
        .users_mut()
        .filter(|user| user.role == Role::Student)
        .map(|user| {
            user.attendance = true;
            user.username.clone()
        })
        .collect();
    logger::log(&format!("Marked attendance for {} students", marked.len()));
    marked
}

/// Attendance flag of the first user with this name, whatever their role.
pub fn check_attendance(store: &ClassroomStore, username: &str) -> Result<bool, ClassroomError> {
    store
        .users()
        .iter()
        .find(|user| user.username == username)
        .map(|user| user.attendance)
        .ok_or_else(|| ClassroomError::UnknownUser(username.to_string()))
}
