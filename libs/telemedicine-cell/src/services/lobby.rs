// libs/telemedicine-cell/src/services/lobby.rs
use shared_models::auth::{User, UserRole};

use crate::models::{
    CallSessionStatus, CounterpartTile, DeviceStatus, SelfTile, TelemedicineLobby,
    UpcomingConsultation,
};

pub struct TelemedicineLobbyService;

impl TelemedicineLobbyService {
    pub fn new() -> Self {
        Self
    }

    pub fn lobby_for(&self, user: &User, session: CallSessionStatus) -> TelemedicineLobby {
        let is_patient = user.role == UserRole::Patient;

        TelemedicineLobby {
            title: if is_patient {
                "Connect with your healthcare provider remotely".to_string()
            } else {
                "Conduct virtual consultations with patients".to_string()
            },
            call_prompt: format!(
                "Start a secure video call with your {}",
                if is_patient { "healthcare provider" } else { "patient" }
            ),
            counterpart: self.counterpart_for(user.role),
            self_tile: SelfTile {
                name: user.profile.full_name(),
                initials: user.profile.initials(),
                avatar: user.profile.avatar.clone(),
                label: "You".to_string(),
            },
            upcoming_consultations: if user.role == UserRole::Doctor {
                self.upcoming_consultations()
            } else {
                Vec::new()
            },
            devices: self.device_statuses(),
            session,
        }
    }

    pub fn counterpart_for(&self, role: UserRole) -> CounterpartTile {
        let (name, role_label, initials) = match role {
            UserRole::Patient => ("Dr. Sarah Wilson", "Cardiologist", "SW"),
            UserRole::Doctor | UserRole::Admin => ("John Doe", "Patient", "JD"),
        };

        CounterpartTile {
            name: name.to_string(),
            role_label: role_label.to_string(),
            initials: initials.to_string(),
        }
    }

    // Demonstration queue until consultations come from the booking side
    pub fn upcoming_consultations(&self) -> Vec<UpcomingConsultation> {
        vec![
            UpcomingConsultation {
                id: "1".to_string(),
                patient_name: "John Doe".to_string(),
                initials: "JD".to_string(),
                time: "2:00 PM".to_string(),
                consultation_type: "Follow-up".to_string(),
                avatar: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face".to_string()),
            },
            UpcomingConsultation {
                id: "2".to_string(),
                patient_name: "Emily Johnson".to_string(),
                initials: "EJ".to_string(),
                time: "3:30 PM".to_string(),
                consultation_type: "Consultation".to_string(),
                avatar: Some("https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face".to_string()),
            },
        ]
    }

    pub fn device_statuses(&self) -> Vec<DeviceStatus> {
        ["Camera", "Microphone", "Speakers"]
            .into_iter()
            .map(|device| DeviceStatus {
                device: device.to_string(),
                ready: true,
            })
            .collect()
    }
}

impl Default for TelemedicineLobbyService {
    fn default() -> Self {
        Self::new()
    }
}
