use bevy_ecs::message::Message;

/// Music track ids.
pub const MUSIC_BACKGROUND: &str = "background";

/// Sound effect ids.
pub const FX_HIT_CAT: &str = "hitCat";
pub const FX_HIT_CAT_LADY: &str = "hitCatLady";
pub const FX_WIN: &str = "win";
pub const FX_LOSE: &str = "lose";

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

impl AudioCmd {
    pub fn play_fx(id: &str) -> Self {
        AudioCmd::PlayFx { id: id.to_string() }
    }
}

/// Messages sent *back* from the audio thread
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicFinished { id: String },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
