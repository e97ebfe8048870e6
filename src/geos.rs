// src/geos.rs

/// States offered in the search filters, each with its local government
/// areas in display order.
pub const NG_STATES: &[(&str, &[&str])] = &[
    (
        "Rivers",
        &[
            "Abua/Odual",
            "Ahoada East",
            "Ahoada West",
            "Akuku-Toru",
            "Andoni",
            "Asari-Toru",
            "Bonny",
            "Degema",
            "Eleme",
            "Emohua",
            "Etche",
            "Gokana",
            "Ikwerre",
            "Khana",
            "Obio/Akpor",
            "Ogba/Egbema/Ndoni",
            "Ogu/Bolo",
            "Okrika",
            "Omuma",
            "Opobo/Nkoro",
            "Oyigbo",
            "Port Harcourt",
            "Tai",
        ],
    ),
    (
        "Lagos",
        &[
            "Agege",
            "Ajeromi-Ifelodun",
            "Alimosho",
            "Amuwo-Odofin",
            "Apapa",
            "Badagry",
            "Epe",
            "Eti-Osa",
            "Ibeju-Lekki",
            "Ifako-Ijaiye",
            "Ikeja",
            "Ikorodu",
            "Kosofe",
            "Lagos Island",
            "Lagos Mainland",
            "Mushin",
            "Ojo",
            "Oshodi-Isolo",
            "Shomolu",
            "Surulere",
        ],
    ),
    (
        "Bayelsa",
        &[
            "Brass",
            "Ekeremor",
            "Kolokuma/Opokuma",
            "Nembe",
            "Ogbia",
            "Sagbama",
            "Southern Ijaw",
            "Yenagoa",
        ],
    ),
    (
        "FCT",
        &[
            "Abaji",
            "Bwari",
            "Gwagwalada",
            "Kuje",
            "Kwali",
            "Municipal Area Council",
        ],
    ),
];

/// Local government areas for `state`. Unknown or empty state → no options.
pub fn local_govts_for(state: &str) -> &'static [&'static str] {
    NG_STATES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, lgas)| *lgas)
        .unwrap_or(&[])
}

pub fn state_names() -> impl Iterator<Item = &'static str> {
    NG_STATES.iter().map(|(name, _)| *name)
}
