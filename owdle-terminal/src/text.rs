use owdle_types::{AttributeKey, GuessError, Locale};

pub fn attribute_label(key: AttributeKey, locale: Locale) -> &'static str {
    match (locale, key) {
        (Locale::En, AttributeKey::Name) => "Name",
        (Locale::En, AttributeKey::Species) => "Species",
        (Locale::En, AttributeKey::Role) => "Role",
        (Locale::En, AttributeKey::Gender) => "Gender",
        (Locale::En, AttributeKey::Year) => "Year",
        (Locale::Fr, AttributeKey::Name) => "Nom",
        (Locale::Fr, AttributeKey::Species) => "Espèce",
        (Locale::Fr, AttributeKey::Role) => "Rôle",
        (Locale::Fr, AttributeKey::Gender) => "Genre",
        (Locale::Fr, AttributeKey::Year) => "Année",
        (_, AttributeKey::Continent) => "Continent",
        (_, AttributeKey::Affiliation) => "Affiliation",
    }
}

pub fn title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Find the hero",
        Locale::Fr => "Trouve le héros",
    }
}

pub fn win(name: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Correct! The hero was {}.", name),
        Locale::Fr => format!("Bravo ! Le héros était {}.", name),
    }
}

pub fn guess_count(count: usize, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Guesses: {}", count),
        Locale::Fr => format!("Essais : {}", count),
    }
}

pub fn no_guesses(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "No guesses yet. Start by typing a hero name.",
        Locale::Fr => "Pas encore d'essai. Commence par taper un héros.",
    }
}

pub fn countdown(time: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Next hero in {}", time),
        Locale::Fr => format!("Prochain héros dans {}", time),
    }
}

/// Message for a rejected guess, `None` when the rejection is silent.
pub fn guess_error(error: &GuessError, locale: Locale) -> Option<&'static str> {
    let message = match (error.message_key()?, locale) {
        ("unknownHero", Locale::En) => "Unknown hero. Pick a name from the list.",
        ("unknownHero", Locale::Fr) => "Héros inconnu. Choisis un nom dans la liste.",
        ("alreadyGuessed", Locale::En) => "You already guessed that hero.",
        ("alreadyGuessed", Locale::Fr) => "Tu as déjà essayé ce héros.",
        ("roundSolved", Locale::En) => "Round over. Type :new to play again.",
        ("roundSolved", Locale::Fr) => "Partie terminée. Tape :new pour rejouer.",
        _ => return None,
    };
    Some(message)
}

/// French name of a data value, or the value itself.
pub fn translate_value<'a>(key: AttributeKey, value: &'a str, locale: Locale) -> &'a str {
    if locale == Locale::En {
        return value;
    }

    match key {
        AttributeKey::Role => match value {
            "Damage" => "Dégâts",
            "Support" => "Soutien",
            "Bruiser" => "Colosse",
            "Initiator" => "Engagement",
            "Stalwart" => "Indéfectible",
            "Recon" => "Reconnaissance",
            "Sharpshooter" => "Fine gâchette",
            "Specialist" => "Spécialiste",
            "Medic" => "Secouriste",
            "Tactician" => "Tactique",
            "Survivor" => "Survie",
            _ => value,
        },
        AttributeKey::Species => match value {
            "Human" => "Humain",
            "Omnic" => "Omniac",
            _ => value,
        },
        AttributeKey::Gender => match value {
            "Female" => "Femme",
            "Male" => "Homme",
            "Non-binary" => "Non binaire",
            "None" => "Aucun",
            _ => value,
        },
        AttributeKey::Continent => match value {
            "Asia" => "Asie",
            "Africa" => "Afrique",
            "Other" => "Autre",
            "America" => "Amerique",
            "Oceania" => "Oceanie",
            _ => value,
        },
        AttributeKey::Affiliation => match value {
            "Crusaders" => "Croisés",
            "Shimada Clan" => "Clan Shimada",
            "Wuxing University" => "Université Wuxing",
            "Null Sector" => "Secteur Zéro",
            "Russian Defense Forces" => "Forces de défense russes",
            "Volskaya Industries" => "Industries Volskaya",
            "Ironclad Guild" => "Guilde des cuirassés",
            "Talon" => "La Griffe",
            "The Conspiracy" => "La Conspiration",
            "Deadlock Gang" => "Gang Deadlock",
            "Carribbean Coalition" => "Coalition Caraibéenne",
            "Helix Security International" => "Helix Sécurité Internationale",
            "Hashimoto Clan" => "Clan Hashimoto",
            "Danish Armed Forces" => "Forces armées danoises",
            "British Military" => "Armée Britannique",
            "Inti Warriors" => "Guerriers d'Inti",
            "Yamagami blades" => "Lames Yamagami",
            "Project Red Promise" => "Projet Promesse Rouge",
            "The Collective" => "Le Collectif",
            "Deepsea Raiders" => "Pilleurs des Abysses",
            "The Ministries" => "Les Ministères",
            "Australian Liberation Front" => "Front de Libération Australien",
            // Overwatch, MEKA, Blackwatch, Shambali and the rest keep their names
            _ => value,
        },
        AttributeKey::Name | AttributeKey::Year => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_error_messages() {
        let unknown = GuessError::UnknownHero {
            query: "zzz".to_string(),
        };
        assert_eq!(
            guess_error(&unknown, Locale::Fr),
            Some("Héros inconnu. Choisis un nom dans la liste.")
        );
        assert_eq!(guess_error(&GuessError::EmptyInput, Locale::En), None);
        assert!(guess_error(&GuessError::RoundSolved, Locale::En).is_some());
    }

    #[test]
    fn test_translate_value() {
        assert_eq!(translate_value(AttributeKey::Role, "Damage", Locale::Fr), "Dégâts");
        assert_eq!(translate_value(AttributeKey::Role, "Damage", Locale::En), "Damage");
        assert_eq!(translate_value(AttributeKey::Role, "Flanker", Locale::Fr), "Flanker");
        assert_eq!(translate_value(AttributeKey::Continent, "Asia", Locale::Fr), "Asie");
        assert_eq!(translate_value(AttributeKey::Name, "Human", Locale::Fr), "Human");
    }

    #[test]
    fn test_translate_value_covers_data_tables() {
        assert_eq!(translate_value(AttributeKey::Affiliation, "Talon", Locale::Fr), "La Griffe");
        assert_eq!(translate_value(AttributeKey::Affiliation, "Null Sector", Locale::Fr), "Secteur Zéro");
        assert_eq!(translate_value(AttributeKey::Affiliation, "Overwatch", Locale::Fr), "Overwatch");
        assert_eq!(translate_value(AttributeKey::Affiliation, "Talon", Locale::En), "Talon");
        assert_eq!(translate_value(AttributeKey::Species, "Omnic", Locale::Fr), "Omniac");
        assert_eq!(translate_value(AttributeKey::Species, "Animal", Locale::Fr), "Animal");
        assert_eq!(translate_value(AttributeKey::Gender, "None", Locale::Fr), "Aucun");
        assert_eq!(translate_value(AttributeKey::Continent, "Oceania", Locale::Fr), "Oceanie");
    }

    #[test]
    fn test_labels_and_messages() {
        assert_eq!(attribute_label(AttributeKey::Year, Locale::Fr), "Année");
        assert_eq!(attribute_label(AttributeKey::Continent, Locale::Fr), "Continent");
        assert_eq!(win("Mercy", Locale::En), "Correct! The hero was Mercy.");
        assert_eq!(countdown("01:02:03", Locale::Fr), "Prochain héros dans 01:02:03");
        assert_eq!(guess_count(3, Locale::Fr), "Essais : 3");
    }
}
