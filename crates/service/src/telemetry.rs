//! Fixed mock readings. No state, input is ignored.

use serde::Serialize;

/// Whole-degree temperatures in °C: boiler, brew kettle, lauter tun and wort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Temperatures {
    pub boiler: u32,
    #[serde(rename = "varna")]
    pub brew_kettle: u32,
    #[serde(rename = "scezovac")]
    pub lauter_tun: u32,
    #[serde(rename = "mladina")]
    pub wort: u32,
}

/// Boiler water volume in litres.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterLevel {
    pub boiler_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub status: &'static str,
    pub ambient_temp: f64,
    pub last_maintenance: &'static str,
    pub pump_status: &'static str,
    pub mixer_status: &'static str,
}

pub fn temperatures() -> Temperatures {
    Temperatures { boiler: 70, brew_kettle: 65, lauter_tun: 58, wort: 40 }
}

pub fn water_level() -> WaterLevel {
    WaterLevel { boiler_level: 32.5 }
}

pub fn system_status() -> SystemStatus {
    SystemStatus {
        status: "Normal",
        ambient_temp: 22.3,
        last_maintenance: "2023-12-10",
        pump_status: "Off",
        mixer_status: "Off",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperatures_have_four_wire_keys() {
        let v = serde_json::to_value(temperatures()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["boiler", "varna", "scezovac", "mladina"] {
            assert!(obj.contains_key(key), "{key}");
        }
        assert_eq!(v["boiler"], 70);
        assert!(v["boiler"].is_u64());
    }

    #[test]
    fn readings_are_constant() {
        assert_eq!(temperatures(), temperatures());
        assert_eq!(serde_json::to_value(water_level()).unwrap()["boilerLevel"], 32.5);
        assert_eq!(serde_json::to_value(system_status()).unwrap()["pumpStatus"], "Off");
    }
}
