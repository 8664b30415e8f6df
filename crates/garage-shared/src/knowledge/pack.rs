//! Built-in vehicle knowledge pack.
//!
//! Static catalog compiled into the binary. Category order is significant:
//! the matcher only grants fallback matches to the first triggered category
//! when nothing matched before it.

use super::Severity;

/// A static problem entry
pub struct PackProblem {
    pub id: &'static str,
    pub symptoms: &'static [&'static str],
    pub explanation: &'static str,
    pub causes: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub severity: Severity,
}

/// A static category entry
pub struct PackCategory {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    pub problems: &'static [PackProblem],
}

/// Built-in categories, in enumeration order
pub const BUILTIN_PACK: &[PackCategory] = &[
    // Engine
    PackCategory {
        id: "moteur",
        keywords: &["moteur", "démarr", "demarr", "surchauffe", "puissance", "accélér"],
        problems: &[
            PackProblem {
                id: "surchauffe",
                symptoms: &[
                    "surchauffe",
                    "température monte",
                    "temperature monte",
                    "jauge de température",
                    "fumée blanche",
                    "liquide de refroidissement",
                ],
                explanation: "Une surchauffe moteur indique que le circuit de refroidissement n'évacue plus correctement la chaleur.",
                causes: &[
                    "Niveau de liquide de refroidissement trop bas",
                    "Fuite sur une durite ou sur le radiateur",
                    "Thermostat bloqué en position fermée",
                    "Ventilateur de refroidissement défaillant",
                    "Pompe à eau usée",
                ],
                solutions: &[
                    "Arrêtez-vous dès que possible et coupez le moteur",
                    "Laissez refroidir au moins 30 minutes avant d'ouvrir le vase d'expansion",
                    "Vérifiez et complétez le niveau de liquide de refroidissement",
                    "Faites contrôler le circuit de refroidissement par un professionnel",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "ne_demarre_pas",
                symptoms: &[
                    "ne démarre pas",
                    "ne demarre pas",
                    "démarre plus",
                    "demarre plus",
                    "refuse de démarrer",
                    "ne veut pas démarrer",
                    "ne tourne pas",
                ],
                explanation: "Un moteur qui ne démarre pas vient le plus souvent d'un défaut d'alimentation électrique, de carburant ou d'allumage.",
                causes: &[
                    "Batterie déchargée ou bornes oxydées",
                    "Démarreur défaillant",
                    "Réservoir vide ou pompe à carburant en panne",
                    "Antidémarrage ou clé non reconnue",
                    "Bougies d'allumage ou de préchauffage usées",
                ],
                solutions: &[
                    "Vérifiez que les voyants du tableau de bord s'allument au contact",
                    "Contrôlez le niveau de carburant",
                    "Essayez un démarrage avec des câbles ou un booster",
                    "Contactez l'assistance si le moteur ne démarre toujours pas",
                ],
                severity: Severity::Critical,
            },
            PackProblem {
                id: "bruit_anormal",
                symptoms: &[
                    "claquement",
                    "cliquetis",
                    "cogne",
                    "bruit moteur",
                    "bruit du moteur",
                    "sifflement",
                ],
                explanation: "Un bruit anormal du moteur signale souvent une usure mécanique ou un défaut de lubrification.",
                causes: &[
                    "Niveau d'huile insuffisant",
                    "Courroie d'accessoires détendue ou usée",
                    "Poussoirs hydrauliques ou culbuteurs usés",
                    "Échappement percé ou mal fixé",
                ],
                solutions: &[
                    "Contrôlez immédiatement le niveau d'huile moteur",
                    "Évitez les hauts régimes jusqu'au diagnostic",
                    "Faites inspecter la courroie et la distribution",
                    "Prenez rendez-vous au garage si le bruit persiste",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "perte_puissance",
                symptoms: &[
                    "perte de puissance",
                    "manque de puissance",
                    "n'accélère plus",
                    "accélère mal",
                    "à-coups",
                    "a-coups",
                    "mode dégradé",
                ],
                explanation: "Une perte de puissance indique que le moteur manque d'air ou de carburant, ou qu'il est passé en mode dégradé.",
                causes: &[
                    "Filtre à air encrassé",
                    "Injecteurs encrassés",
                    "Vanne EGR ou turbo défaillant",
                    "Filtre à particules colmaté",
                ],
                solutions: &[
                    "Vérifiez si un voyant moteur est allumé",
                    "Faites lire les codes défaut avec une valise de diagnostic",
                    "Remplacez le filtre à air si nécessaire",
                    "Faites nettoyer le circuit d'admission",
                ],
                severity: Severity::Normal,
            },
        ],
    },
    // Brakes: every entry is safety related
    PackCategory {
        id: "freins",
        keywords: &["frein", "pédale", "plaquette", "disque"],
        problems: &[
            PackProblem {
                id: "pedale_molle",
                symptoms: &[
                    "molle",
                    "spongieuse",
                    "s'enfonce",
                    "pédale descend",
                    "jusqu'au plancher",
                ],
                explanation: "Une pédale de frein molle traduit généralement la présence d'air ou une fuite dans le circuit hydraulique.",
                causes: &[
                    "Air dans le circuit de freinage",
                    "Fuite de liquide de frein",
                    "Liquide de frein trop ancien chargé d'humidité",
                    "Maître-cylindre défaillant",
                ],
                solutions: &[
                    "Limitez vos déplacements et roulez avec prudence",
                    "Vérifiez le niveau de liquide de frein",
                    "Faites purger le circuit de freinage",
                    "Faites contrôler le maître-cylindre et les flexibles",
                ],
                severity: Severity::Critical,
            },
            PackProblem {
                id: "bruit_freinage",
                symptoms: &["grince", "grincement", "couine", "siffle", "crisse", "frotte"],
                explanation: "Un bruit au freinage signale le plus souvent des plaquettes usées ou un contact métal contre métal.",
                causes: &[
                    "Plaquettes de frein arrivées au témoin d'usure",
                    "Disques rayés ou voilés",
                    "Corps étranger coincé entre le disque et la plaquette",
                    "Étriers grippés",
                ],
                solutions: &[
                    "Faites contrôler l'épaisseur des plaquettes",
                    "Remplacez plaquettes et disques si nécessaire",
                    "Faites nettoyer et graisser les points de contact des étriers",
                ],
                severity: Severity::Critical,
            },
            PackProblem {
                id: "vibrations_freinage",
                symptoms: &["vibre", "vibration", "tremble", "saccade"],
                explanation: "Des vibrations au freinage indiquent le plus souvent des disques de frein voilés.",
                causes: &[
                    "Disques voilés après une surchauffe",
                    "Usure irrégulière des disques",
                    "Jeu dans les rotules ou les silentblocs du train avant",
                ],
                solutions: &[
                    "Évitez les freinages appuyés et prolongés",
                    "Faites mesurer le voile des disques",
                    "Remplacez les disques par paire",
                ],
                severity: Severity::Critical,
            },
            PackProblem {
                id: "tire_cote",
                symptoms: &[
                    "tire à gauche",
                    "tire à droite",
                    "tire d'un côté",
                    "dévie",
                    "devie",
                ],
                explanation: "Une voiture qui tire d'un côté au freinage révèle un déséquilibre de freinage entre les roues.",
                causes: &[
                    "Étrier grippé d'un côté",
                    "Flexible de frein obstrué",
                    "Plaquettes usées de façon inégale",
                    "Pression des pneus différente entre la gauche et la droite",
                ],
                solutions: &[
                    "Contrôlez la pression des pneus",
                    "Faites vérifier les étriers et les flexibles",
                    "Faites réaliser un test de freinage sur banc",
                ],
                severity: Severity::Critical,
            },
        ],
    },
    // Battery and electrical
    PackCategory {
        id: "electrique",
        keywords: &[
            "batterie",
            "électrique",
            "electrique",
            "alternateur",
            "phare",
            "feux",
            "ampoule",
            "clignotant",
            "fusible",
        ],
        problems: &[
            PackProblem {
                id: "batterie_dechargee",
                symptoms: &[
                    "décharge",
                    "decharge",
                    "à plat",
                    "batterie morte",
                    "se vide",
                    "ne tient pas la charge",
                ],
                explanation: "Une batterie qui se décharge ne parvient plus à stocker ou à recevoir assez d'énergie.",
                causes: &[
                    "Batterie en fin de vie (plus de 4 à 5 ans)",
                    "Équipement resté allumé moteur coupé (plafonnier, phares)",
                    "Alternateur qui ne recharge plus",
                    "Bornes oxydées ou mal serrées",
                ],
                solutions: &[
                    "Vérifiez qu'aucun équipement ne reste allumé moteur coupé",
                    "Nettoyez et resserrez les bornes de la batterie",
                    "Faites tester la batterie et la charge de l'alternateur",
                    "Remplacez la batterie si le test est mauvais",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "alternateur",
                symptoms: &["voyant batterie", "alternateur", "ne charge plus", "ne recharge plus"],
                explanation: "Un voyant de charge allumé en roulant indique que l'alternateur ne recharge plus la batterie.",
                causes: &[
                    "Alternateur défaillant",
                    "Courroie d'accessoires cassée ou détendue",
                    "Régulateur de tension hors service",
                ],
                solutions: &[
                    "Coupez les équipements électriques non indispensables",
                    "Rejoignez un garage sans couper le moteur si possible",
                    "Faites contrôler l'alternateur et la courroie",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "eclairage",
                symptoms: &[
                    "ne s'allume",
                    "grillé",
                    "grillée",
                    "ampoule",
                    "clignote vite",
                    "faible",
                ],
                explanation: "Un défaut d'éclairage vient généralement d'une ampoule grillée, d'un fusible ou d'un mauvais contact.",
                causes: &[
                    "Ampoule grillée",
                    "Fusible hors service",
                    "Connecteur oxydé",
                    "Relais de commande défaillant",
                ],
                solutions: &[
                    "Identifiez le feu concerné avec l'aide d'une autre personne",
                    "Remplacez l'ampoule défectueuse",
                    "Contrôlez le fusible correspondant dans la boîte à fusibles",
                ],
                severity: Severity::Normal,
            },
        ],
    },
    // Tyres and wheels
    PackCategory {
        id: "pneus",
        keywords: &["pneu", "crevaison", "crevé", "roue", "jante", "pression"],
        problems: &[
            PackProblem {
                id: "crevaison",
                symptoms: &[
                    "crevé",
                    "crevaison",
                    "perd de l'air",
                    "dégonfl",
                    "degonfl",
                    "à plat",
                ],
                explanation: "Un pneu qui perd de l'air présente une crevaison ou un défaut d'étanchéité de la valve ou de la jante.",
                causes: &[
                    "Clou ou vis planté dans la bande de roulement",
                    "Valve défectueuse",
                    "Jante endommagée après un choc",
                ],
                solutions: &[
                    "Ne roulez pas avec un pneu dégonflé",
                    "Installez la roue de secours ou utilisez le kit anti-crevaison",
                    "Faites réparer ou remplacer le pneu rapidement",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "usure_irreguliere",
                symptoms: &["usure", "pneu usé", "pneus usés", "lisse"],
                explanation: "Une usure anormale des pneus révèle un problème de géométrie, de pression ou d'amortisseurs.",
                causes: &[
                    "Pression de gonflage incorrecte",
                    "Parallélisme déréglé",
                    "Amortisseurs fatigués",
                ],
                solutions: &[
                    "Contrôlez la pression une fois par mois, pneus froids",
                    "Faites vérifier le parallélisme",
                    "Remplacez les pneus sous 1,6 mm de profondeur de sculpture",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "vibration_volant",
                symptoms: &["vibre", "vibration", "volant tremble", "tremble"],
                explanation: "Des vibrations dans le volant à vitesse stabilisée viennent souvent d'un mauvais équilibrage des roues.",
                causes: &["Roues mal équilibrées", "Pneu déformé", "Jante voilée"],
                solutions: &[
                    "Faites équilibrer les roues",
                    "Inspectez les pneus à la recherche de hernies",
                    "Faites contrôler les jantes",
                ],
                severity: Severity::Normal,
            },
        ],
    },
    // Climate control
    PackCategory {
        id: "climatisation",
        keywords: &["clim", "chauffage", "ventilation", "buée", "aération", "désembuage"],
        problems: &[
            PackProblem {
                id: "clim_inefficace",
                symptoms: &[
                    "pas froid",
                    "plus froid",
                    "pas de froid",
                    "ne refroidit",
                    "air chaud",
                    "souffle chaud",
                ],
                explanation: "Une climatisation qui ne refroidit plus manque le plus souvent de gaz réfrigérant.",
                causes: &[
                    "Niveau de gaz réfrigérant insuffisant",
                    "Fuite dans le circuit de climatisation",
                    "Compresseur ou embrayage de compresseur défaillant",
                    "Condenseur encrassé",
                ],
                solutions: &[
                    "Faites recharger la climatisation en atelier",
                    "Faites rechercher une éventuelle fuite",
                    "Utilisez la climatisation régulièrement, même en hiver",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "mauvaise_odeur",
                symptoms: &["odeur", "sent mauvais", "moisi", "sent le"],
                explanation: "Une mauvaise odeur à la ventilation vient du développement de bactéries dans le circuit d'air.",
                causes: &[
                    "Filtre d'habitacle saturé",
                    "Humidité stagnante dans l'évaporateur",
                    "Évacuation d'eau bouchée",
                ],
                solutions: &[
                    "Remplacez le filtre d'habitacle",
                    "Faites réaliser un traitement antibactérien du circuit",
                    "Coupez la climatisation quelques minutes avant l'arrêt pour sécher l'évaporateur",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "buee_persistante",
                symptoms: &["buée", "embué", "désembu", "humidité"],
                explanation: "Une buée persistante indique un excès d'humidité dans l'habitacle ou une ventilation insuffisante.",
                causes: &[
                    "Filtre d'habitacle colmaté",
                    "Joints de portes ou de pare-brise non étanches",
                    "Recyclage d'air activé en permanence",
                ],
                solutions: &[
                    "Activez la climatisation avec l'air dirigé vers le pare-brise",
                    "Désactivez le recyclage d'air",
                    "Remplacez le filtre d'habitacle",
                ],
                severity: Severity::Normal,
            },
        ],
    },
    // Fuel and energy efficiency
    PackCategory {
        id: "consommation",
        keywords: &[
            "consommation",
            "consomme",
            "carburant",
            "essence",
            "gasoil",
            "diesel",
            "économ",
            "autonomie",
        ],
        problems: &[
            PackProblem {
                id: "surconsommation",
                symptoms: &[
                    "consomme trop",
                    "consomme beaucoup",
                    "surconsommation",
                    "consommation élevée",
                    "consommation a augmenté",
                    "plus que d'habitude",
                ],
                explanation: "Une hausse de consommation vient souvent d'un entretien en retard ou d'une conduite trop dynamique.",
                causes: &[
                    "Pneus sous-gonflés",
                    "Filtre à air encrassé",
                    "Accélérations brusques et régimes élevés",
                    "Charge ou galerie de toit inutile",
                    "Sonde lambda défaillante",
                ],
                solutions: &[
                    "Vérifiez la pression des pneus",
                    "Retirez les charges inutiles et la galerie de toit",
                    "Adoptez une conduite souple et anticipée",
                    "Faites réaliser l'entretien périodique",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "eco_conduite",
                symptoms: &[
                    "réduire ma consommation",
                    "consommer moins",
                    "économiser",
                    "éco-conduite",
                    "eco-conduite",
                    "conseils",
                ],
                explanation: "L'éco-conduite réduit sensiblement la consommation et les émissions au quotidien.",
                causes: &[
                    "Accélérations et freinages brusques",
                    "Vitesse élevée sur autoroute",
                    "Climatisation utilisée en continu",
                    "Moteur laissé au ralenti à l'arrêt",
                ],
                solutions: &[
                    "Passez les rapports tôt, vers 2000 tr/min",
                    "Anticipez pour limiter les freinages",
                    "Réduisez votre vitesse de 10 km/h sur autoroute",
                    "Coupez le moteur lors des arrêts prolongés",
                ],
                severity: Severity::Normal,
            },
            PackProblem {
                id: "autonomie_reduite",
                symptoms: &[
                    "autonomie baisse",
                    "autonomie diminue",
                    "moins d'autonomie",
                    "perd de l'autonomie",
                    "recharge lente",
                ],
                explanation: "Une baisse d'autonomie d'un véhicule électrique ou hybride dépend surtout de la température et du style de conduite.",
                causes: &[
                    "Températures froides qui réduisent la capacité de la batterie",
                    "Chauffage ou climatisation très sollicités",
                    "Vitesse élevée sur voie rapide",
                    "Vieillissement de la batterie de traction",
                ],
                solutions: &[
                    "Préchauffez l'habitacle pendant la recharge",
                    "Privilégiez le mode éco",
                    "Limitez la vitesse sur voie rapide",
                    "Faites contrôler l'état de santé de la batterie",
                ],
                severity: Severity::Normal,
            },
        ],
    },
];
