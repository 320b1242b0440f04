use super::*;

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

#[rocket::catch(default)]
pub fn default_catcher(status: Status, _req: &rocket::Request) -> (Status, Json<JsonErrorResponse>) {
    let body = JsonErrorResponse {
        http_status: status.code,
        message: status.reason_lossy().to_owned(),
    };
    (status, Json(body))
}
