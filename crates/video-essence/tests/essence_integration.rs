//! Integration tests for video essence lookup and parsing
//!
//! Exercises lookup and parse together against device model snapshots
//! shaped like the ones the control plane publishes.

#[cfg(test)]
mod tests {
    use essence_types::{EssenceLocator, EssenceType};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use video_essence::{
        essence_kwl, get_video_essence, parse_kwl, parse_video_essence, DeviceModel, EssenceError,
    };

    /// Routes `tracing` output to the test harness.
    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    fn essence(t: EssenceType, index: i64) -> Value {
        let kwl = essence_kwl(&EssenceLocator::new(t, index)).expect("resolvable locator");
        json!({ "raw": { "kwl": kwl } })
    }

    /// Snapshot with `count` populated rows in every subsystem.
    fn full_snapshot(count: i64) -> DeviceModel {
        let rows = |f: &dyn Fn(i64) -> Value| (0..count).map(f).collect::<Vec<_>>();

        let snapshot = json!({
            "video_mixer": {
                "instances": rows(&|i: i64| json!({ "output": essence(EssenceType::VideoMixer, i) })),
            },
            "r_t_p_receiver": {
                "video_receivers": rows(&|i: i64| json!({
                    "media_specific": { "output": { "video": essence(EssenceType::RtpReceiver, i) } }
                })),
            },
            "video_signal_generator": {
                "instances": rows(&|i: i64| json!({
                    "output": essence(EssenceType::VideoSignalGenerator, i)
                })),
            },
            "re_play": {
                "video": {
                    "players": rows(&|i: i64| json!({
                        "output": { "video": essence(EssenceType::Replay, i) }
                    })),
                },
            },
            "i_o_module": {
                "input": rows(&|i: i64| json!({
                    "sdi": { "output": { "video": essence(EssenceType::Sdi, i) } }
                })),
            },
            "color_correction": {
                "cc1d": rows(&|i: i64| json!({ "output": essence(EssenceType::ColorCorrection, i) })),
            },
        });

        DeviceModel::from_json_str(&snapshot.to_string()).expect("valid snapshot")
    }

    fn resolvable_types() -> impl Iterator<Item = EssenceType> {
        EssenceType::ALL.into_iter().filter(|t| t.is_resolvable())
    }

    #[test]
    fn test_lookup_then_parse_every_type() {
        init_logging();
        let model = full_snapshot(4);

        for t in resolvable_types() {
            for index in 0..4 {
                let locator = EssenceLocator::new(t, index);
                let found = get_video_essence(&model, &locator).expect("subsystem present");
                assert!(found.is_some(), "no essence for {locator}");
                assert_eq!(parse_video_essence(found), locator);
            }
        }
    }

    #[test]
    fn test_lookup_beyond_range_is_none() {
        init_logging();
        let model = full_snapshot(2);

        for t in resolvable_types() {
            let locator = EssenceLocator::new(t, 2);
            assert_eq!(get_video_essence(&model, &locator).unwrap(), None);

            let unresolved = EssenceLocator::unresolved(t);
            assert_eq!(get_video_essence(&model, &unresolved).unwrap(), None);
        }
    }

    #[test]
    fn test_lookup_miss_parses_to_not_available() {
        let model = full_snapshot(1);
        let locator = EssenceLocator::new(EssenceType::Replay, 9);
        let missing = get_video_essence(&model, &locator).unwrap();
        assert_eq!(parse_video_essence(missing), EssenceLocator::NOT_AVAILABLE);
    }

    #[test]
    fn test_missing_subsystem_per_type() {
        init_logging();
        let model = DeviceModel::default();

        for t in resolvable_types() {
            let err = get_video_essence(&model, &EssenceLocator::new(t, 0)).unwrap_err();
            match err {
                EssenceError::MissingSubsystem { subsystem } => {
                    assert_eq!(Some(subsystem.as_str()), t.source_tag());
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_sdi_output_comes_from_io_module() {
        let model = DeviceModel::from_json_str(
            &json!({
                "i_o_module": {
                    "input": [
                        null,
                        null,
                        null,
                        { "sdi": { "output": { "video": { "raw": { "kwl": "i_o_module.3" } } } } }
                    ]
                }
            })
            .to_string(),
        )
        .unwrap();

        let sdi3 = EssenceLocator::new(EssenceType::Sdi, 3);
        let found = get_video_essence(&model, &sdi3).unwrap();
        assert_eq!(found.map(|e| e.kwl()), Some("i_o_module.3"));
        assert_eq!(parse_video_essence(found), sdi3);

        // the raw tag is not something lookups dispatch on
        let raw_tag = EssenceLocator::new(EssenceType::IoModule, 3);
        assert_eq!(get_video_essence(&model, &raw_tag).unwrap(), None);
    }

    #[test]
    fn test_color_correction_bracketed_index() {
        for index in [0, 3, 11] {
            assert_eq!(
                parse_kwl(&format!("color_correction.cc1d[{index}].output")),
                EssenceLocator::new(EssenceType::ColorCorrection, index)
            );
        }
    }

    #[test]
    fn test_locator_json_shape() {
        let locator = parse_kwl("i_o_module.3");
        assert_eq!(
            serde_json::to_value(locator).unwrap(),
            json!({ "essenceType": "sdi", "essenceIndex": 3 })
        );
        assert_eq!(
            serde_json::to_value(parse_kwl("nothing here")).unwrap(),
            json!({ "essenceType": "N/A", "essenceIndex": -1 })
        );
    }

    #[test]
    fn test_yaml_snapshot() {
        let model = DeviceModel::from_yaml_str(
            r#"
video_signal_generator:
  instances:
    - output:
        raw:
          kwl: video_signal_generator.instances[0].output
color_correction: {}
"#,
        )
        .unwrap();

        let vsg0 = EssenceLocator::new(EssenceType::VideoSignalGenerator, 0);
        let found = model.video_essence(&vsg0).unwrap();
        assert_eq!(parse_video_essence(found), vsg0);

        let cc0 = EssenceLocator::new(EssenceType::ColorCorrection, 0);
        assert_eq!(model.video_essence(&cc0).unwrap(), None);

        let mixer0 = EssenceLocator::new(EssenceType::VideoMixer, 0);
        assert!(model.video_essence(&mixer0).unwrap_err().is_precondition());
    }
}
