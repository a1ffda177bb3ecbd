//! Rule-based FAQ responder for the LLC formation assistant widget.

use crate::i18n::Locale;

/// One FAQ rule: any keyword hit selects the answer.
struct FaqEntry {
    keywords: &'static [&'static str],
    answer: &'static str,
}

/// Per-locale knowledge table with greeting and fallback copy.
struct Knowledge {
    greeting: &'static str,
    fallback: &'static str,
    entries: &'static [FaqEntry],
}

/// Keyword-matching FAQ assistant.
///
/// Answers are selected by scanning an ordered rule list against the
/// lowercased message: the first rule with any keyword contained in
/// the message wins, and an unmatched message gets the locale's
/// fallback answer. Only French and English tables exist; other
/// locales use French.
pub struct FaqBot {
    knowledge: &'static Knowledge,
}

impl FaqBot {
    /// Creates an assistant for the given locale.
    pub fn new(locale: Locale) -> Self {
        let knowledge = match locale {
            Locale::En => &KNOWLEDGE_EN,
            _ => &KNOWLEDGE_FR,
        };
        Self { knowledge }
    }

    /// Opening message shown before the user asks anything.
    pub fn greeting(&self) -> &'static str {
        self.knowledge.greeting
    }

    /// Answers a user message with first-match-wins rule lookup.
    pub fn reply(&self, message: &str) -> &'static str {
        let lower = message.to_lowercase();
        for entry in self.knowledge.entries {
            if entry.keywords.iter().any(|kw| lower.contains(kw)) {
                return entry.answer;
            }
        }
        self.knowledge.fallback
    }
}

static KNOWLEDGE_FR: Knowledge = Knowledge {
    greeting: "Bonjour! Je suis l'assistant Maghrib.Digital. Posez-moi vos questions sur la création de LLC US.",
    fallback: "Je ne suis pas sûr de comprendre. Essayez de poser une question sur: la création de LLC, les prix, les délais, ou Stripe.",
    entries: &[
        FaqEntry {
            keywords: &["prix", "coût", "tarif", "combien"],
            answer: "Nos forfaits LLC commencent à 1,799 MAD (Starter), 2,299 MAD (Growth), et 3,999 MAD (Business). Le forfait Growth est le plus populaire et inclut la passerelle de paiement.",
        },
        FaqEntry {
            keywords: &["délai", "temps", "combien de temps", "durée", "jours"],
            answer: "La création complète prend 5 jours ouvrables. L'EIN est obtenu en 24-48h. Le compte bancaire US est configuré dans les 3-5 jours suivant l'approbation.",
        },
        FaqEntry {
            keywords: &["stripe", "paiement", "accepter"],
            answer: "Oui! Nos LLC sont structurées pour être Stripe-ready. Nous garantissons la conformité aux exigences Stripe pour les non-résidents US.",
        },
        FaqEntry {
            keywords: &["delaware", "wyoming", "état", "choisir"],
            answer: "Delaware est idéal si vous visez des investisseurs ou une IPO. Wyoming est plus économique avec des frais annuels plus bas. Les deux fonctionnent avec Stripe.",
        },
        FaqEntry {
            keywords: &["ein", "fiscal", "irs", "impôt"],
            answer: "L'EIN (Employer Identification Number) est votre numéro fiscal US. Nous l'obtenons pour vous en 24-48h via le service express de l'IRS.",
        },
        FaqEntry {
            keywords: &["banque", "compte", "mercury", "brex"],
            answer: "Nous configurons des comptes Mercury, Brex ou Relay pour les non-résidents US. Ces banques fintech acceptent les LLC étrangères sans nécessiter de présence physique.",
        },
        FaqEntry {
            keywords: &["document", "papier", "reçu"],
            answer: "Vous recevrez: Certificat LLC, EIN Letter, Operating Agreement, et guide de configuration bancaire. Le tout livré par email en 5 jours.",
        },
        FaqEntry {
            keywords: &["maroc", "marocain", "résident"],
            answer: "Absolument! Nous sommes basés à Casablanca et spécialisés dans la création de LLC pour les entrepreneurs marocains. Nous parlons Darija, Français et Anglais.",
        },
        FaqEntry {
            keywords: &["anonyme", "privacy", "confidentialité"],
            answer: "Nous offrons des LLC anonymes à partir de 3,499 MAD avec service de nominee et protection maximale de votre identité.",
        },
        FaqEntry {
            keywords: &["whatsapp", "contact", "joindre"],
            answer: "Cliquez sur le bouton WhatsApp en bas à droite du site. Nous répondons en moins d'1 heure pendant les heures ouvrables (Lun-Sam).",
        },
    ],
};

static KNOWLEDGE_EN: Knowledge = Knowledge {
    greeting: "Hello! I'm the Maghrib.Digital assistant. Ask me your questions about US LLC formation.",
    fallback: "I'm not sure I understand. Try asking about: LLC formation, pricing, timeline, or Stripe.",
    entries: &[
        FaqEntry {
            keywords: &["price", "cost", "how much", "pricing"],
            answer: "Our LLC packages start at 1,799 MAD (Starter), 2,299 MAD (Growth), and 3,999 MAD (Business). Growth is most popular and includes payment gateway setup.",
        },
        FaqEntry {
            keywords: &["timeline", "how long", "time", "days"],
            answer: "Full formation takes 5 business days. EIN is obtained in 24-48h. US bank account is set up within 3-5 days after approval.",
        },
        FaqEntry {
            keywords: &["stripe", "payment", "accept"],
            answer: "Yes! Our LLCs are structured to be Stripe-ready. We guarantee compliance with Stripe requirements for non-US residents.",
        },
        FaqEntry {
            keywords: &["delaware", "wyoming", "state", "choose"],
            answer: "Delaware is ideal if you're targeting investors or IPO. Wyoming is more economical with lower annual fees. Both work with Stripe.",
        },
        FaqEntry {
            keywords: &["ein", "tax", "irs"],
            answer: "EIN (Employer Identification Number) is your US tax ID. We obtain it for you in 24-48h via IRS express service.",
        },
        FaqEntry {
            keywords: &["bank", "account", "mercury", "brex"],
            answer: "We set up Mercury, Brex or Relay accounts for non-US residents. These fintech banks accept foreign LLCs without requiring physical presence.",
        },
        FaqEntry {
            keywords: &["document", "paper", "receive"],
            answer: "You'll receive: LLC Certificate, EIN Letter, Operating Agreement, and bank setup guide. All delivered via email in 5 days.",
        },
        FaqEntry {
            keywords: &["morocco", "moroccan", "resident"],
            answer: "Absolutely! We're based in Casablanca and specialize in LLC formation for Moroccan entrepreneurs. We speak Darija, French and English.",
        },
        FaqEntry {
            keywords: &["anonymous", "privacy"],
            answer: "We offer anonymous LLCs starting at 3,499 MAD with nominee service and maximum identity protection.",
        },
        FaqEntry {
            keywords: &["whatsapp", "contact", "reach"],
            answer: "Click the WhatsApp button on the bottom right of the site. We respond within 1 hour during business hours (Mon-Sat).",
        },
    ],
};
