//! Class and roster endpoints

use crate::api::response::{Ack, BatchAck};
use crate::api::ApiClient;
use crate::domain::classes::{
    AddStudentRequest, AddStudentsRequest, AddTeacherRequest, AssignStudentsRequest, Class,
    NewClass, RemoveStudentRequest,
};
use crate::domain::students::Student;
use crate::error::AppResult;

pub async fn list(api: &ApiClient) -> AppResult<Vec<Class>> {
    api.get("/api/classes").await
}

pub async fn get(api: &ApiClient, id: &str) -> AppResult<Class> {
    api.get(&format!("/api/classes/{id}")).await
}

pub async fn create(api: &ApiClient, class: &NewClass) -> AppResult<Ack> {
    api.post("/api/classes", class).await
}

pub async fn create_many(api: &ApiClient, classes: &[NewClass]) -> AppResult<BatchAck> {
    api.post("/api/classes/batch", &classes).await
}

pub async fn delete(api: &ApiClient, id: &str) -> AppResult<Ack> {
    api.delete(&format!("/api/classes/{id}")).await
}

pub async fn add_teacher(api: &ApiClient, class_id: &str, teacher_id: i64) -> AppResult<Ack> {
    api.post(
        &format!("/api/classes/{class_id}/teachers"),
        &AddTeacherRequest { teacher_id },
    )
    .await
}

// Roster

pub async fn students(api: &ApiClient, class_id: &str) -> AppResult<Vec<Student>> {
    api.get(&format!("/api/classes/{class_id}/students")).await
}

pub async fn add_student(api: &ApiClient, class_id: &str, student_id: &str) -> AppResult<Ack> {
    api.post(
        &format!("/api/classes/{class_id}/students"),
        &AddStudentRequest {
            student_id: student_id.to_string(),
        },
    )
    .await
}

pub async fn add_students(
    api: &ApiClient,
    class_id: &str,
    student_ids: Vec<String>,
) -> AppResult<BatchAck> {
    api.post(
        &format!("/api/classes/{class_id}/students/batch"),
        &AddStudentsRequest { student_ids },
    )
    .await
}

pub async fn remove_student(api: &ApiClient, class_id: &str, student_id: &str) -> AppResult<Ack> {
    api.delete_with_body(
        &format!("/api/classes/{class_id}/students"),
        &RemoveStudentRequest {
            student_id: student_id.to_string(),
        },
    )
    .await
}

pub async fn remove_all_students(api: &ApiClient, class_id: &str) -> AppResult<Ack> {
    api.delete(&format!("/api/classes/{class_id}/students/all"))
        .await
}

/// POST /api/classes/students/batch
///
/// Assign students across several classes in one request.
pub async fn assign_many(api: &ApiClient, request: &AssignStudentsRequest) -> AppResult<BatchAck> {
    api.post("/api/classes/students/batch", request).await
}
