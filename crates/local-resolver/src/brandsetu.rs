//! The stock Brandsetu Digital answer table.

use crate::table::{QaEntry, QaTable};

/// Quick questions offered before the visitor says anything.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "What services do you offer?",
    "How much do you charge?",
    "How do I get started?",
    "Show me your portfolio",
];

/// The answer used when no keyword matches.
pub const DEFAULT_ANSWER: &str = "Thanks for your question! While I may not have a specific answer for that, our team would love to help you directly.\n\n📞 Contact us at: +91 98765 43210\n📧 Email: hello@brandsetudigital.com\n\nOr try asking about our services, pricing, or how to get started!";

/// Builds the stock table, in priority order.
pub fn brandsetu_table() -> QaTable {
    let entries = vec![
        QaEntry::new(
            ["services", "offer", "provide", "do"],
            "What services do you offer?",
            "At Brandsetu Digital, we offer a comprehensive range of digital marketing services including:\n\n• Social Media Marketing\n• Search Engine Optimization (SEO)\n• Pay-Per-Click Advertising (PPC)\n• Content Marketing\n• Brand Strategy & Design\n• Website Development\n• Video Production\n• Influencer Marketing\n\nWe're your one-stop solution for all digital growth needs!",
        ),
        QaEntry::new(
            ["pricing", "cost", "price", "charge", "fee", "expensive"],
            "What are your pricing plans?",
            "Our pricing is customized based on your specific needs and goals. We offer flexible packages starting from:\n\n• Starter Package: ₹15,000/month\n• Growth Package: ₹35,000/month\n• Enterprise Package: Custom pricing\n\nContact us for a free consultation and detailed quote tailored to your business!",
        ),
        QaEntry::new(
            ["contact", "reach", "call", "email", "phone"],
            "How can I contact you?",
            "You can reach us through multiple channels:\n\n📧 Email: hello@brandsetudigital.com\n📱 Phone: +91 98765 43210\n💬 WhatsApp: +91 98765 43210\n🌐 Website: brandsetudigital.com\n\nOur team typically responds within 2-4 hours during business hours!",
        ),
        QaEntry::new(
            ["location", "office", "address", "where", "based"],
            "Where is your office located?",
            "We're headquartered in the heart of the digital hub:\n\n📍 123 Digital Tower, Tech Park\nBangalore, Karnataka 560001\nIndia\n\nWe also work with clients globally through our virtual collaboration setup!",
        ),
        QaEntry::new(
            ["time", "long", "duration", "results", "expect"],
            "How long does it take to see results?",
            "Results timeline varies by service:\n\n⚡ PPC Ads: Immediate to 1-2 weeks\n📈 SEO: 3-6 months for significant results\n📱 Social Media: 1-3 months for engagement growth\n🎨 Branding: 4-8 weeks for complete brand identity\n\nWe provide monthly reports so you can track progress every step of the way!",
        ),
        QaEntry::new(
            ["portfolio", "work", "examples", "clients", "case"],
            "Can I see your portfolio?",
            "Absolutely! We've worked with 200+ brands across industries:\n\n🏆 Award-winning campaigns for leading startups\n📊 50M+ social media impressions delivered\n💰 300% average ROI for our clients\n⭐ 4.5+ rating from our clients\n\nVisit our website's Work section or ask for a detailed case study!",
        ),
        QaEntry::new(
            ["start", "begin", "process", "onboard", "how"],
            "How do I get started?",
            "Getting started is easy! Here's our simple process:\n\n1️⃣ Schedule a free discovery call\n2️⃣ We analyze your current digital presence\n3️⃣ Receive a customized strategy proposal\n4️⃣ Approve and kick off your campaign\n\nClick 'Let's Talk' on our website or just say 'I want to get started' here!",
        ),
        QaEntry::new(
            ["hello", "hi", "hey", "greetings"],
            "Hello!",
            "Hey there! 👋 Welcome to Brandsetu Digital!\n\nI'm here to help you with any questions about our services, pricing, or how we can help grow your brand.\n\nWhat would you like to know?",
        ),
    ];
    QaTable::new(entries, DEFAULT_ANSWER)
}
