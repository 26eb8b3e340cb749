//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`](crate::events::audio::AudioCmd) messages,
//!   emitting [`AudioMessage`](crate::events::audio::AudioMessage) responses.
//! - [`forward_audio_cmds`] hands this frame's commands to the thread.
//! - [`poll_audio_messages`] non-blockingly drains the audio thread's replies
//!   into the ECS message queue each frame.
//! - [`update_bevy_audio_cmds`] and [`update_bevy_audio_messages`] advance
//!   the ECS message queues.
//!
//! Gameplay never waits on audio. A missing device or a missing file is
//! logged and the game carries on silently.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain any pending replies from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // the thread may already be gone during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
///
/// Runs first in the frame so commands written by gameplay stay readable
/// until the forwarder has seen them.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Report load failures coming back from the audio thread.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("Music '{}' unavailable: {}", id, error)
            }
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("Sound effect '{}' unavailable: {}", id, error)
            }
            other => debug!("Audio: {:?}", other),
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns the Raylib audio device and every `Music`/`Sound` handle. Drains
/// commands without blocking, pumps playing streams, restarts looped tracks
/// and reports finished ones. Returns on [`AudioCmd::Shutdown`] or when the
/// device cannot be opened.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device, running silent: {}", e);
            // keep draining so senders never back up
            for cmd in rx_cmd.iter() {
                if cmd == AudioCmd::Shutdown {
                    break;
                }
            }
            return;
        }
    };

    info!("Audio thread starting (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("Music loaded id='{}' path='{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    } else {
                        debug!("Music '{}' not loaded, ignoring play", id);
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("Sound loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                    } else {
                        debug!("Sound '{}' not loaded, ignoring play", id);
                    }
                }
                AudioCmd::Shutdown => {
                    info!("Audio shutdown requested");
                    break 'run;
                }
            }
        }

        // streams must be pumped while playing
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if music.get_time_played() >= music.get_time_length() - 0.01 {
                    ended.push(id.clone());
                }
            }
        }
        for id in ended {
            if looped.contains(&id) {
                if let Some(music) = musics.get(&id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                playing.remove(&id);
                let _ = tx_evt.send(AudioMessage::MusicFinished { id });
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    // handles must drop before the device
    musics.clear();
    sounds.clear();
    info!("Audio thread exiting (id={:?})", std::thread::current().id());
}
