//! Embedded resource declarations for the built-in resource types.
//!
//! Each function returns a JSON document describing one resource type, its
//! backend attribute aliases and its extensions. The registry decodes them at
//! startup, so no external files are needed for the default setup.

/// All embedded declaration documents, in registration order.
pub fn all() -> [&'static str; 3] {
    [user_declaration(), group_declaration(), fido_device_declaration()]
}

/// Returns the User resource declaration as a JSON string.
///
/// The `name` attribute is stored natively, one backend attribute per part.
pub fn user_declaration() -> &'static str {
    r#"{
  "name": "User",
  "schema": "urn:ietf:params:scim:schemas:core:2.0:User",
  "description": "User Account",
  "endpoint": "/Users",
  "nameAttribute": "name",
  "identifierStorageName": "inum",
  "attributes": [
    { "path": "id", "storageName": "inum", "description": "Unique identifier for the User" },
    { "path": "externalId", "storageName": "oxTrustExternalId" },
    { "path": "userName", "storageName": "uid", "description": "Unique identifier for the User, typically used to authenticate" },
    { "path": "name", "type": "complex", "description": "The components of the user's real name" },
    { "path": "name.formatted", "storageName": "oxTrustNameFormatted" },
    { "path": "name.familyName", "storageName": "sn" },
    { "path": "name.givenName" },
    { "path": "name.middleName" },
    { "path": "name.honorificPrefix", "storageName": "oxTrusthonorificPrefix" },
    { "path": "name.honorificSuffix", "storageName": "oxTrusthonorificSuffix" },
    { "path": "displayName" },
    { "path": "nickName", "storageName": "nickname" },
    { "path": "profileUrl", "type": "reference", "storageName": "oxTrustProfileURL" },
    { "path": "title", "storageName": "oxTrustTitle" },
    { "path": "userType", "storageName": "oxTrustUserType" },
    { "path": "preferredLanguage" },
    { "path": "locale" },
    { "path": "timezone", "storageName": "zoneinfo" },
    { "path": "active", "type": "boolean", "storageName": "oxTrustActive" },
    { "path": "emails", "type": "complex", "multiValued": true, "storageName": "oxTrustEmail" },
    { "path": "emails.value" },
    { "path": "emails.display" },
    { "path": "emails.type" },
    { "path": "emails.primary", "type": "boolean" },
    { "path": "phoneNumbers", "type": "complex", "multiValued": true, "storageName": "oxTrustPhoneValue" },
    { "path": "phoneNumbers.value" },
    { "path": "phoneNumbers.display" },
    { "path": "phoneNumbers.type" },
    { "path": "phoneNumbers.primary", "type": "boolean" },
    { "path": "ims", "type": "complex", "multiValued": true, "storageName": "oxTrustImsValue" },
    { "path": "ims.value" },
    { "path": "ims.display" },
    { "path": "ims.type" },
    { "path": "ims.primary", "type": "boolean" },
    { "path": "photos", "type": "complex", "multiValued": true, "storageName": "oxTrustPhotos" },
    { "path": "photos.value", "type": "reference" },
    { "path": "photos.display" },
    { "path": "photos.type" },
    { "path": "photos.primary", "type": "boolean" },
    { "path": "addresses", "type": "complex", "multiValued": true, "storageName": "oxTrustAddresses" },
    { "path": "addresses.formatted" },
    { "path": "addresses.streetAddress" },
    { "path": "addresses.locality" },
    { "path": "addresses.region" },
    { "path": "addresses.postalCode" },
    { "path": "addresses.country" },
    { "path": "addresses.type" },
    { "path": "addresses.primary", "type": "boolean" },
    { "path": "groups", "type": "complex", "multiValued": true, "storageName": "memberOf" },
    { "path": "groups.value" },
    { "path": "groups.$ref", "type": "reference" },
    { "path": "groups.display" },
    { "path": "groups.type" },
    { "path": "entitlements", "type": "complex", "multiValued": true, "storageName": "oxTrustEntitlements" },
    { "path": "entitlements.value" },
    { "path": "entitlements.display" },
    { "path": "entitlements.type" },
    { "path": "entitlements.primary", "type": "boolean" },
    { "path": "roles", "type": "complex", "multiValued": true, "storageName": "oxTrustRole" },
    { "path": "roles.value" },
    { "path": "roles.display" },
    { "path": "roles.type" },
    { "path": "roles.primary", "type": "boolean" },
    { "path": "x509Certificates", "type": "complex", "multiValued": true, "storageName": "oxTrustx509Certificate" },
    { "path": "x509Certificates.value", "type": "binary" },
    { "path": "x509Certificates.display" },
    { "path": "x509Certificates.type" },
    { "path": "x509Certificates.primary", "type": "boolean" }
  ],
  "extensions": [
    {
      "urn": "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User",
      "name": "EnterpriseUser",
      "description": "Enterprise User",
      "fields": [
        { "name": "employeeNumber" },
        { "name": "costCenter", "storageName": "oxTrustCostCenter" },
        { "name": "organization", "storageName": "o" },
        { "name": "division", "storageName": "oxTrustDivision" },
        { "name": "department", "storageName": "departmentNumber" }
      ]
    },
    {
      "urn": "urn:ietf:params:scim:schemas:extension:gluu:2.0:User",
      "name": "GluuUserCustomExtension",
      "description": "Gluu User Custom Extension",
      "fields": [
        { "name": "scimCustomFirst" },
        { "name": "scimCustomSecond", "type": "dateTime", "multiValued": true },
        { "name": "scimCustomThird", "type": "decimal" }
      ]
    }
  ]
}"#
}

/// Returns the Group resource declaration as a JSON string.
///
/// Members are stored as serialized fragments under the `member` carrier.
pub fn group_declaration() -> &'static str {
    r#"{
  "name": "Group",
  "schema": "urn:ietf:params:scim:schemas:core:2.0:Group",
  "description": "Group",
  "endpoint": "/Groups",
  "identifierStorageName": "inum",
  "attributes": [
    { "path": "id", "storageName": "inum", "description": "Unique identifier for the Group" },
    { "path": "externalId", "storageName": "oxTrustExternalId" },
    { "path": "displayName", "storageName": "cn", "description": "A human-readable name for the Group" },
    { "path": "members", "type": "complex", "multiValued": true, "storageName": "member", "description": "A list of members of the Group" },
    { "path": "members.value", "description": "Identifier of the member of this Group" },
    { "path": "members.$ref", "type": "reference" },
    { "path": "members.display" },
    { "path": "members.type", "description": "A label indicating the type of resource, e.g. 'User' or 'Group'" }
  ]
}"#
}

/// Returns the FidoDevice resource declaration as a JSON string.
pub fn fido_device_declaration() -> &'static str {
    r#"{
  "name": "FidoDevice",
  "schema": "urn:ietf:params:scim:schemas:core:2.0:FidoDevice",
  "description": "Fido Device",
  "endpoint": "/FidoDevices",
  "identifierStorageName": "oxId",
  "attributes": [
    { "path": "id", "storageName": "oxId" },
    { "path": "userId", "storageName": "personInum" },
    { "path": "creationDate", "type": "dateTime" },
    { "path": "application", "storageName": "oxApplication" },
    { "path": "counter", "storageName": "oxCounter" },
    { "path": "deviceData", "storageName": "oxDeviceData" },
    { "path": "deviceHashCode", "storageName": "oxDeviceHashCode" },
    { "path": "deviceKeyHandle", "storageName": "oxDeviceKeyHandle" },
    { "path": "deviceRegistrationConf", "storageName": "oxDeviceRegistrationConf" },
    { "path": "lastAccessTime", "type": "dateTime", "storageName": "oxLastAccessTime" },
    { "path": "status", "storageName": "oxStatus" },
    { "path": "displayName" },
    { "path": "description" },
    { "path": "nickname", "storageName": "oxNickName" }
  ]
}"#
}
