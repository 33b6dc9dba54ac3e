use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Serialize,
};

use myparking_boundary::{
    Data, NewVehicle, Parking, Profile, StartParking, UpdatePassword, Vehicle, Zone,
};

use crate::{Error, Request, Response, Result, Session};

const STATUS_UNAUTHORIZED: u16 = 401;
const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;

/// Authorized myParking API
///
/// Every request carries the bearer token of the owning [`Session`].
/// A response with status `401` ends the session before the error is
/// handed back to the caller.
#[derive(Clone)]
pub struct ParkingApi {
    session: Session,
}

impl ParkingApi {
    pub(crate) const fn new(session: Session) -> Self {
        Self { session }
    }

    async fn send<T>(&self, req: Request) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let req = match self.session.token() {
            Some(token) => req.bearer(token),
            None => req,
        };
        log::debug!("{} {}", req.method, req.path);
        let response = self.session.transport().send(req).await?;
        if response.status == STATUS_UNAUTHORIZED {
            log::warn!("Access token has been rejected: logout");
            self.session.logout(true).await;
            return Err(Error::Unauthorized);
        }
        into_json(response)
    }

    async fn send_json<D, T>(&self, req: Request, data: &D) -> Result<T>
    where
        D: Serialize,
        T: DeserializeOwned,
    {
        self.send(req.json(data)?).await
    }

    async fn fetch_data<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let Data { data } = self.send(Request::get(path)).await?;
        Ok(data)
    }

    pub async fn profile(&self) -> Result<Profile> {
        self.send(Request::get("profile")).await
    }

    pub async fn update_profile(&self, profile: &Profile) -> Result<()> {
        let IgnoredAny = self.send_json(Request::put("profile"), profile).await?;
        Ok(())
    }

    pub async fn update_password(&self, password: &UpdatePassword) -> Result<()> {
        let IgnoredAny = self.send_json(Request::put("password"), password).await?;
        Ok(())
    }

    pub async fn vehicles(&self) -> Result<Vec<Vehicle>> {
        self.fetch_data("vehicles").await
    }

    pub async fn vehicle(&self, id: u64) -> Result<Vehicle> {
        self.fetch_data(&format!("vehicles/{id}")).await
    }

    pub async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<()> {
        let IgnoredAny = self.send_json(Request::post("vehicles"), vehicle).await?;
        Ok(())
    }

    pub async fn update_vehicle(&self, id: u64, vehicle: &NewVehicle) -> Result<()> {
        let url = format!("vehicles/{id}");
        let IgnoredAny = self.send_json(Request::put(url), vehicle).await?;
        Ok(())
    }

    pub async fn delete_vehicle(&self, id: u64) -> Result<()> {
        let IgnoredAny = self.send(Request::delete(format!("vehicles/{id}"))).await?;
        Ok(())
    }

    pub async fn zones(&self) -> Result<Vec<Zone>> {
        self.fetch_data("zones").await
    }

    pub async fn active_parkings(&self) -> Result<Vec<Parking>> {
        self.fetch_data("parkings").await
    }

    pub async fn parking_history(&self) -> Result<Vec<Parking>> {
        self.fetch_data("parkings/history").await
    }

    pub async fn parking(&self, id: u64) -> Result<Parking> {
        self.fetch_data(&format!("parkings/{id}")).await
    }

    pub async fn start_parking(&self, parking: &StartParking) -> Result<()> {
        let req = Request::post("parkings/start");
        let IgnoredAny = self.send_json(req, parking).await?;
        Ok(())
    }

    pub async fn stop_parking(&self, id: u64) -> Result<()> {
        let IgnoredAny = self.send(Request::put(format!("parkings/{id}"))).await?;
        Ok(())
    }
}

pub(crate) fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        let body = response.body.trim();
        let body = if body.is_empty() { "null" } else { body };
        return Ok(serde_json::from_str(body)?);
    }
    let Response { status, body } = response;
    let myparking_boundary::Error { message, errors } =
        serde_json::from_str(&body).unwrap_or_default();
    match status {
        STATUS_UNAUTHORIZED => Err(Error::Unauthorized),
        STATUS_UNPROCESSABLE_ENTITY => Err(Error::Validation(errors)),
        _ => Err(Error::Api { status, message }),
    }
}
