//! End-to-end checks: catalog → mixer → encoder, decoded with `hound`.

use std::io::Cursor;

use chime::catalog;
use chime::dsp::renderer::render_effect_wav;
use chime::{SynthConfig, ToneSpec, Waveform};

fn decode(bytes: &[u8]) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::new(Cursor::new(bytes)).expect("valid WAV");
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("readable samples");
    (spec, samples)
}

#[test]
fn encode_decodes_as_mono_16_bit() {
    let tone = ToneSpec::new(440.0, 0.1, Waveform::Triangle, 0.2);
    let samples = chime::render(&tone, 44100);
    let wav = chime::encode(&samples);

    let (spec, decoded) = decode(&wav);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(decoded.len(), samples.len());
    assert_eq!(wav.len() - 44, 2 * samples.len());
}

#[test]
fn decoded_samples_match_quantization() {
    let samples = [0.0, 0.25, -0.25, 0.9, -0.9, 1.5];
    let (_, decoded) = decode(&chime::encode(&samples));
    assert_eq!(decoded, vec![0, 8191, -8192, 29490, -29491, 32767]);
}

#[test]
fn every_builtin_effect_round_trips() {
    let cfg = SynthConfig::default();
    for effect in catalog::builtin() {
        let wav = render_effect_wav(&effect, &cfg);
        let (spec, decoded) = decode(&wav);
        assert_eq!(spec.channels, 1, "{}", effect.name);
        assert_eq!(spec.sample_rate, 44100, "{}", effect.name);
        assert_eq!(wav.len(), 44 + 2 * decoded.len(), "{}", effect.name);

        // 0.9 ceiling; -0.9 quantizes to -29491
        let peak = decoded.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);
        assert!(peak <= 29491, "{} peaks at {peak}", effect.name);
    }
}

#[test]
fn rendering_is_deterministic() {
    let cfg = SynthConfig::default();
    for effect in catalog::builtin() {
        assert_eq!(
            render_effect_wav(&effect, &cfg),
            render_effect_wav(&effect, &cfg),
            "{} should render identically",
            effect.name
        );
    }
}

#[test]
fn layered_effects_start_silent_and_end_quiet() {
    let cfg = SynthConfig::default();
    let lead_in = cfg.samples_for(cfg.silence_prefix);
    for effect in catalog::builtin() {
        if !matches!(effect.voicing, chime::Voicing::Layered { .. }) {
            continue;
        }
        let (_, decoded) = decode(&render_effect_wav(&effect, &cfg));
        assert!(
            decoded[..lead_in].iter().all(|&s| s == 0),
            "{} should open with silence",
            effect.name
        );
        let last = *decoded.last().unwrap();
        assert!(last.abs() <= 1, "{} should fade out, ends at {last}", effect.name);
    }
}

#[test]
fn generated_files_decode() {
    let tmp = tempfile::tempdir().unwrap();
    let written =
        catalog::generate_all(&catalog::builtin(), &SynthConfig::default(), tmp.path()).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert!(names.contains(&"tick.wav".to_string()));
    assert!(names.contains(&"game_over.wav".to_string()));

    let tick = hound::WavReader::open(tmp.path().join("tick.wav")).unwrap();
    // 600 Hz for 50 ms, no lead-in
    assert_eq!(tick.duration(), 2205);
}

#[test]
fn external_catalog_renders() {
    let json = r#"[
        { "name": "blip", "type": "single",
          "tone": { "frequency": 880, "duration": 0.08, "waveform": "triangle", "volume": 0.3 } },
        { "name": "chord", "type": "layered", "silencePrefix": false,
          "tones": [
            { "frequency": 523, "duration": 0.2, "volume": 0.6 },
            { "frequency": 659, "duration": 0.2, "volume": 0.6 },
            { "frequency": 784, "duration": 0.2, "volume": 0.6 }
          ] }
    ]"#;
    let effects = catalog::from_json(json).unwrap();
    let cfg = SynthConfig::default();
    let (_, chord) = decode(&render_effect_wav(&effects[1], &cfg));
    assert_eq!(chord.len(), cfg.samples_for(0.2 + 0.01));
    let peak = chord.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(peak <= 29491, "chord peaks at {peak}");
}
