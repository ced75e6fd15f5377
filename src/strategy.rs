//! Strategy pattern: vehicles composed from drive and display behaviors.
//!
//! Without strategies, sports and off-road vehicles would each override
//! `drive` with the same advanced behavior, and passenger and off-road
//! vehicles would duplicate the special display. Injecting the behavior
//! objects lets every preset share one implementation of each.

pub trait DriveStrategy {
    fn drive(&self) -> &str;
}

pub trait DisplayStrategy {
    fn display(&self) -> &str;
}

pub struct NormalDrive;

impl DriveStrategy for NormalDrive {
    fn drive(&self) -> &str {
        "Normal Drive Strategy"
    }
}

pub struct SportsDrive;

impl DriveStrategy for SportsDrive {
    fn drive(&self) -> &str {
        "Sports Drive Strategy"
    }
}

pub struct NormalDisplay;

impl DisplayStrategy for NormalDisplay {
    fn display(&self) -> &str {
        "Normal display"
    }
}

pub struct SpecialDisplay;

impl DisplayStrategy for SpecialDisplay {
    fn display(&self) -> &str {
        "Special display"
    }
}

/// Drive behavior from a closure, for one-off strategies.
pub struct FnDrive<F>
where
    F: Fn() -> &'static str,
{
    drive_fn: F,
}

impl<F> FnDrive<F>
where
    F: Fn() -> &'static str,
{
    pub fn new(drive_fn: F) -> Self {
        Self { drive_fn }
    }
}

impl<F> DriveStrategy for FnDrive<F>
where
    F: Fn() -> &'static str,
{
    fn drive(&self) -> &str {
        (self.drive_fn)()
    }
}

pub struct Vehicle {
    name: String,
    drive: Box<dyn DriveStrategy>,
    display: Box<dyn DisplayStrategy>,
}

impl Vehicle {
    pub fn new(
        name: impl Into<String>,
        drive: Box<dyn DriveStrategy>,
        display: Box<dyn DisplayStrategy>,
    ) -> Self {
        Self {
            name: name.into(),
            drive,
            display,
        }
    }

    pub fn passenger() -> Self {
        Self::new("Passenger", Box::new(NormalDrive), Box::new(SpecialDisplay))
    }

    pub fn sports() -> Self {
        Self::new("Sports", Box::new(SportsDrive), Box::new(NormalDisplay))
    }

    pub fn off_road() -> Self {
        Self::new("OffRoad", Box::new(SportsDrive), Box::new(SpecialDisplay))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn drive(&self) -> &str {
        self.drive.drive()
    }

    pub fn display(&self) -> &str {
        self.display.display()
    }

    pub fn set_drive_strategy(&mut self, drive: Box<dyn DriveStrategy>) {
        self.drive = drive;
    }

    pub fn set_display_strategy(&mut self, display: Box<dyn DisplayStrategy>) {
        self.display = display;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let passenger = Vehicle::passenger();
        assert_eq!(passenger.drive(), "Normal Drive Strategy");
        assert_eq!(passenger.display(), "Special display");

        let sports = Vehicle::sports();
        assert_eq!(sports.drive(), "Sports Drive Strategy");
        assert_eq!(sports.display(), "Normal display");

        let off_road = Vehicle::off_road();
        assert_eq!(off_road.drive(), "Sports Drive Strategy");
        assert_eq!(off_road.display(), "Special display");
    }

    #[test]
    fn test_strategy_switch() {
        let mut vehicle = Vehicle::passenger();
        vehicle.set_drive_strategy(Box::new(SportsDrive));
        assert_eq!(vehicle.drive(), "Sports Drive Strategy");

        vehicle.set_display_strategy(Box::new(NormalDisplay));
        assert_eq!(vehicle.display(), "Normal display");
        assert_eq!(vehicle.name(), "Passenger");
    }

    #[test]
    fn test_closure_strategy() {
        let eco = FnDrive::new(|| "Eco Drive Strategy");
        assert_eq!(eco.drive(), "Eco Drive Strategy");

        let vehicle = Vehicle::new("Hybrid", Box::new(eco), Box::new(NormalDisplay));
        assert_eq!(vehicle.drive(), "Eco Drive Strategy");
    }
}
