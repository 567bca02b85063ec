//! French word lists.

pub(crate) const FIRST_MALE: &[&str] = &[
    "Jean", "Pierre", "Michel", "Louis", "Nicolas", "François", "Antoine", "Julien", "Thomas",
    "Lucas", "Hugo", "Théo", "Paul", "Alexandre", "Étienne", "Mathis",
];

pub(crate) const FIRST_FEMALE: &[&str] = &[
    "Marie", "Camille", "Léa", "Chloé", "Manon", "Emma", "Sarah", "Laura", "Julie", "Mathilde",
    "Lucie", "Pauline", "Charlotte", "Juliette", "Élise", "Margaux",
];

pub(crate) const LAST: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "David",
];

pub(crate) const CITIES: &[&str] = &[
    "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Montpellier", "Strasbourg",
    "Bordeaux", "Lille", "Rennes", "Reims", "Toulon", "Grenoble",
];

pub(crate) const STREETS: &[&str] = &[
    "rue de la Paix", "rue Victor Hugo", "avenue de la République", "rue Saint-Honoré",
    "boulevard Voltaire", "rue des Lilas", "rue de l'Église", "avenue Jean Jaurès",
    "rue Pasteur", "rue du Moulin", "place de la Mairie", "rue des Écoles",
];
