// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Replacement payloads for the confirmation and notification blocks.
//!
//! Everything organization-specific lives here. The builders only take the
//! identifier to carry over; all other fields are literals.

use serde_json::{json, Value};

pub const SALES_EMAIL: &str = "verkauf@juenemann-instruments.de";
pub const SENDER_EMAIL: &str = "info@juenemann-instruments.de";
pub const ADMIN_BCC: &str = "simon.koelling@armatherm.de, {admin_email}";
pub const COMPANY_NAME: &str = "Manfred Jünemann Mess- und Regeltechnik GmbH";

/// Form field id holding the submitter's e-mail address.
pub const CUSTOMER_EMAIL_FIELD: &str = "32";

pub const CONFIRMATION_NAME: &str = "Standard Bestätigung";
pub const CONFIRMATION_MESSAGE: &str = "Vielen Dank für Ihr Interesse!\r\n\r\n\
    Eine Bestätigung Ihrer Anfrage erhalten Sie in den nächsten Minuten per Mail.";

pub const ADMIN_NOTIFICATION_NAME: &str = "Administrator-Benachrichtigung";
pub const ADMIN_SUBJECT: &str = "Neue Anfrage über Website";
pub const ADMIN_MESSAGE: &str = "{form_title}\r\n\r\n{all_fields}";

pub const CUSTOMER_NOTIFICATION_NAME: &str = "Kunden Mail";
pub const CUSTOMER_SUBJECT: &str = "Vielen Dank für Ihre Anfrage!";
pub const CUSTOMER_MESSAGE: &str = "Guten Tag {Ansprechpartner:7},\r\n\r\n\
    vielen Dank, dass Sie unser {form_title} genutzt haben. \
    Wir haben Ihre Anfrage erhalten und bearbeiten diese umgehend. \
    Ihr Angebot erhalten Sie in der Regel innerhalb von 24h.\r\n\r\n\
    Falls Sie in der Zwischenzeit weitere Informationen benötigen \
    oder Fragen haben, können Sie gerne direkt auf diese E-Mail antworten.\r\n\r\n\
    Wir bedanken und für Ihr Interesse und freuen uns, Ihnen weiterhelfen zu dürfen.\r\n\r\n\
    Eine Kopie Ihrer Anfrage finden Sie am Ende dieser E-Mail.\r\n\r\n\
    Mit freundlichen Grüßen\r\n\r\n\
    Manfred Jünemann Mess- und Regeltechnik GmbH\r\n\
    Max-Planck-Str. 49\r\n\
    32107 Bad Salzuflen\r\n\
    Tel.: 05222 80568 0\r\n\
    mail: verkauf@juenemann-instruments.de\r\n\r\n\
    {all_fields}";

/// The single default confirmation shown after submission.
pub fn confirmation(id: Value) -> Value {
    json!({
        "id": id,
        "name": CONFIRMATION_NAME,
        "isDefault": true,
        "type": "message",
        "message": CONFIRMATION_MESSAGE,
        "url": "",
        "pageId": "",
        "queryString": "",
        "event": "",
        "disableAutoformat": false,
        "page": "",
        "conditionalLogic": [],
    })
}

/// Internal mail to the sales inbox.
pub fn admin_notification(id: Value) -> Value {
    json!({
        "id": id,
        "isActive": true,
        "to": SALES_EMAIL,
        "name": ADMIN_NOTIFICATION_NAME,
        "event": "form_submission",
        "toType": "email",
        "subject": ADMIN_SUBJECT,
        "message": ADMIN_MESSAGE,
        "service": "wordpress",
        "toEmail": SALES_EMAIL,
        "routing": null,
        "fromName": "",
        "from": SENDER_EMAIL,
        "replyTo": "",
        "bcc": ADMIN_BCC,
        "disableAutoformat": false,
        "notification_conditional_logic_object": "",
        "notification_conditional_logic": "0",
        "conditionalLogic": null,
        "cc": "",
        "enableAttachments": false,
        "toField": "",
        "gfacl_prepared_notifications": true,
    })
}

/// Acknowledgment mail sent to the address entered in the form.
pub fn customer_notification(id: Value) -> Value {
    json!({
        "id": id,
        "name": CUSTOMER_NOTIFICATION_NAME,
        "service": "wordpress",
        "event": "form_submission",
        "toType": "field",
        "toEmail": "",
        "routing": null,
        "fromName": COMPANY_NAME,
        "from": SENDER_EMAIL,
        "replyTo": SALES_EMAIL,
        "bcc": "",
        "subject": CUSTOMER_SUBJECT,
        "message": CUSTOMER_MESSAGE,
        "disableAutoformat": false,
        "notification_conditional_logic_object": "",
        "notification_conditional_logic": "0",
        "conditionalLogic": null,
        "to": CUSTOMER_EMAIL_FIELD,
        "cc": "",
        "enableAttachments": false,
        "isActive": true,
        "toField": CUSTOMER_EMAIL_FIELD,
        // Gravity Forms stores this as the string "null", not JSON null.
        "advanced_conditional_logic_data": "null",
        "gfacl_prepared_notifications": true,
    })
}
