use glam::Vec3;
use walkthrough::camera::Camera;
use walkthrough::config::ControllerConfig;
use walkthrough::first_person::FirstPersonController;
use walkthrough::scenes::ScenePreset;
use walkthrough::script::InputScript;

fn replay(preset: ScenePreset, script_json: &str) -> walkthrough::script::ReplayReport {
    let script = InputScript::from_json(script_json).expect("valid script");
    let scene = preset.build();
    let spawn = preset.spawn();
    let mut controller = FirstPersonController::new(ControllerConfig::default());
    let mut camera = Camera::new(spawn.position);
    controller.look_at(&camera, spawn.look_at);
    script.replay(&mut controller, &mut camera, &scene)
}

#[cfg(test)]
mod replay_tests {
    use super::*;

    #[test]
    fn test_corridor_walk_stops_at_end_wall() {
        let report = replay(
            ScenePreset::Corridor,
            r#"{
                "frame_dt": 1.0,
                "frames": 30,
                "events": [ { "frame": 0, "key": "KeyW", "pressed": true } ]
            }"#,
        );

        assert_eq!(report.scene, "corridor");
        assert_eq!(report.samples.len(), 30);
        assert!(
            report.final_position.abs_diff_eq(Vec3::new(0.0, 1.6, -195.0), 1e-2),
            "final position {:?}",
            report.final_position
        );
        assert_eq!(report.blocked_moves, 10);
        assert_eq!(report.samples.last().map(|s| s.blocked), Some(1));
    }

    #[test]
    fn test_release_event_stops_motion() {
        let report = replay(
            ScenePreset::Corridor,
            r#"{
                "frame_dt": 0.5,
                "frames": 6,
                "events": [
                    { "frame": 0, "key": "ArrowUp", "pressed": true },
                    { "frame": 2, "key": "ArrowUp", "pressed": false }
                ]
            }"#,
        );

        let z: Vec<f32> = report.samples.iter().map(|s| s.position.z).collect();
        assert!((z[0] - 0.0).abs() < 1e-3);
        assert!((z[1] + 5.0).abs() < 1e-3);
        assert!(z[2..].iter().all(|&value| (value + 5.0).abs() < 1e-3));
        assert_eq!(report.blocked_moves, 0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = replay(ScenePreset::Gallery, r#"{ "frames": 2 }"#);

        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(json["scene"], "gallery");
        assert_eq!(json["samples"].as_array().map(Vec::len), Some(2));
        let final_y = json["final_position"][1].as_f64().expect("numeric coordinate");
        assert!((final_y - 1.6).abs() < 1e-6);
    }
}
