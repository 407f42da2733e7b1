use serde::Serialize;

use crate::error::Result;
use crate::profile::LengthProfile;

/// N-statistics for one profile, computed after batch normalization.
#[derive(Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub count: usize,
    pub total_length: u64,
    pub n10: u64,
    pub n50: u64,
    pub n90: u64,
    pub n95: u64,
}

pub fn summarize(profile: &LengthProfile) -> Result<ProfileSummary> {
    Ok(ProfileSummary {
        name: profile.name.clone(),
        count: profile.count(),
        total_length: profile.total_length(),
        n10: profile.n_value(0.10)?,
        n50: profile.n_value(0.50)?,
        n90: profile.n_value(0.90)?,
        n95: profile.n_value(0.95)?,
    })
}

pub fn print_text(summaries: &[ProfileSummary]) {
    for s in summaries {
        println!("{:>9}  #lens: {:>10}", s.name, s.count);
        println!("{:>9} cumlen: {:>10}", s.name, s.total_length);
        for (label, value) in [("n10", s.n10), ("n50", s.n50), ("n90", s.n90), ("n95", s.n95)] {
            println!("{:>9} {:>6}: {:>10}", s.name, label, value);
        }
    }
}

pub fn print_json(summaries: &[ProfileSummary]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summaries)?);
    Ok(())
}
